//! Execution substrate for small domain-specific interpreters.
//!
//! A Strand interpreter walks a pre-tokenized input and transforms a data
//! payload. This crate supplies everything below the grammar:
//!
//! - `Interpreter`: the base state every concrete interpreter composes --
//!   a [`TokenCursor`], a [`FunctionRegistry`], and the data payload
//! - [`Interpret`]: the extension point; a concrete interpreter implements
//!   `run()` and drives the cursor and registries from there
//! - [`FunctionRegistry`] / [`FilterRegistry`]: name-keyed maps of invocable
//!   units with case-insensitive lookup
//! - [`HasFilters`]: opt-in capability trait for interpreters that transform
//!   values through named in-place filters
//!
//! # Architecture
//!
//! The two registries are specializations of one generic [`Registry`] over
//! the two call shapes: functions take positional arguments and return a
//! value, filters take a single value by mutable reference and mutate it in
//! place. Lookup is always case-normalized (keys are stored lower-cased), so
//! callers need not agree on a canonical case convention. Loading over an
//! existing name silently replaces it; unloading a name that was never
//! loaded is an error.
//!
//! Tokenization is not this crate's concern: construction takes any
//! [`Parser`] implementation and drains it once, eagerly.
//!
//! Everything here is single-threaded and synchronous. Each interpreter owns
//! its cursor and registries exclusively; nothing is shared across instances.

pub mod errors;
mod filter;
mod function;
mod interpreter;
mod registry;

pub use errors::{InterpError, InterpResult, RegistryKind};
pub use filter::{FilterBody, FilterRegistry, HasFilters, InterpreterFilter};
pub use function::{FunctionBody, FunctionRegistry, InterpreterFunction};
pub use interpreter::{Interpret, Interpreter};
pub use registry::{Invocable, Registry};

// Re-export the token layer so embedders need only one dependency.
pub use strand_token::{Parser, TokenCursor};
