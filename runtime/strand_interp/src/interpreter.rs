//! The base interpreter state and the `run()` extension point.
//!
//! `Interpreter<T, V>` is not an interpreter by itself: it is the state
//! every concrete interpreter composes -- the token cursor, the function
//! registry, and the data payload. The grammar lives in the composing type,
//! which implements [`Interpret`] and drives the cursor from its `run()`.

use strand_token::{Parser, TokenCursor};

use crate::errors::InterpResult;
use crate::function::{FunctionRegistry, InterpreterFunction};

/// Extension point implemented by concrete interpreters.
///
/// `run()` is expected to drive the cursor via consume/lookahead/lookbehind,
/// execute loaded functions (and filters, when the
/// [`HasFilters`](crate::HasFilters) capability is present), read or mutate
/// the data payload, and return the final transformed value. Registry errors
/// propagate out of `run()` unless the implementation substitutes its own
/// default behavior.
pub trait Interpret<V> {
    /// Execute the interpreter over its parsed tokens.
    fn run(&mut self) -> InterpResult<V>;
}

/// Execution state shared by every concrete interpreter.
///
/// Owns exactly one [`TokenCursor`], one [`FunctionRegistry`], and the data
/// payload of type `V`. Nothing is shared across interpreter instances.
#[derive(Debug)]
pub struct Interpreter<T, V> {
    cursor: TokenCursor<T>,
    functions: FunctionRegistry<V>,
    data: V,
}

impl<T, V> Interpreter<T, V> {
    /// Build the interpreter state from a parser and a data payload.
    ///
    /// The parser is drained once, eagerly: parsing happens here, not during
    /// `run()`. Cursor initialization is the explicit two-phase contract of
    /// [`TokenCursor`]: the empty cursor establishes the unset lookbehind
    /// baseline, then the parsed sequence is primed into it. Lookbehind
    /// stays unset until the first real consume.
    pub fn new<P>(parser: &mut P, data: V) -> Self
    where
        P: Parser<Token = T>,
    {
        let mut cursor = TokenCursor::empty();
        cursor.prime(parser.parse());
        Interpreter {
            cursor,
            functions: FunctionRegistry::new(),
            data,
        }
    }

    // --- cursor -----------------------------------------------------------

    /// Consume the next token. `None` once exhausted.
    pub fn consume(&mut self) -> Option<&T> {
        self.cursor.consume()
    }

    /// Peek at the next token without consuming it.
    pub fn lookahead(&self) -> Option<&T> {
        self.cursor.lookahead()
    }

    /// The token that was current before the latest consume.
    pub fn lookbehind(&self) -> Option<&T> {
        self.cursor.lookbehind()
    }

    /// The underlying cursor, for concrete interpreters that want its full
    /// surface (`current`, `is_exhausted`, ...).
    pub fn cursor(&self) -> &TokenCursor<T> {
        &self.cursor
    }

    // --- functions --------------------------------------------------------

    /// Register a function, replacing any previous entry with that name.
    ///
    /// Returns `&mut Self` so registrations chain.
    pub fn load_function(&mut self, function: InterpreterFunction<V>) -> &mut Self {
        self.functions.load(function);
        self
    }

    /// Remove a loaded function; fails with `NotLoaded` if it never was.
    pub fn unload_function(&mut self, name: &str) -> InterpResult<()> {
        self.functions.unload(name)
    }

    /// Check if a function is loaded, ignoring case.
    pub fn function_exists(&self, name: &str) -> bool {
        self.functions.exists(name)
    }

    /// Execute a loaded function by name.
    ///
    /// Fails with `UnknownInvocable` when the name is not registered.
    pub fn execute_function(&self, name: &str, args: &[V]) -> InterpResult<V> {
        self.functions.invoke(name, args)
    }

    /// The function registry itself, for introspection.
    pub fn functions(&self) -> &FunctionRegistry<V> {
        &self.functions
    }

    // --- data -------------------------------------------------------------

    /// The data payload under transformation.
    pub fn data(&self) -> &V {
        &self.data
    }

    /// Mutable access to the data payload.
    pub fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    /// Surrender the data payload, consuming the interpreter state.
    pub fn into_data(self) -> V {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedParser(Vec<&'static str>);

    impl Parser for FixedParser {
        type Token = &'static str;

        fn parse(&mut self) -> Vec<&'static str> {
            std::mem::take(&mut self.0)
        }
    }

    #[test]
    fn test_construction_drains_parser_eagerly() {
        let mut parser = FixedParser(vec!["a", "b"]);
        let interp: Interpreter<_, String> = Interpreter::new(&mut parser, String::new());
        assert!(parser.0.is_empty());
        assert_eq!(interp.cursor().remaining(), 2);
    }

    #[test]
    fn test_lookbehind_baseline_is_unset_after_construction() {
        let mut parser = FixedParser(vec!["a", "b"]);
        let interp: Interpreter<_, String> = Interpreter::new(&mut parser, String::new());
        assert_eq!(interp.lookbehind(), None);
    }

    #[test]
    fn test_cursor_ops_pass_through() {
        let mut parser = FixedParser(vec!["x", "y"]);
        let mut interp: Interpreter<_, i64> = Interpreter::new(&mut parser, 0);

        assert_eq!(interp.lookahead(), Some(&"x"));
        assert_eq!(interp.consume(), Some(&"x"));
        assert_eq!(interp.consume(), Some(&"y"));
        assert_eq!(interp.lookbehind(), Some(&"x"));
        assert_eq!(interp.consume(), None);
    }

    #[test]
    fn test_function_registration_chains() {
        let mut parser = FixedParser(vec![]);
        let mut interp: Interpreter<&'static str, i64> = Interpreter::new(&mut parser, 0);
        interp
            .load_function(InterpreterFunction::new("one", |_: &[i64]| Ok(1)))
            .load_function(InterpreterFunction::new("two", |_: &[i64]| Ok(2)));
        assert!(interp.function_exists("ONE"));
        assert!(interp.function_exists("two"));
        assert_eq!(interp.execute_function("one", &[]), Ok(1));
    }

    #[test]
    fn test_data_accessors() {
        let mut parser = FixedParser(vec![]);
        let mut interp: Interpreter<&'static str, String> =
            Interpreter::new(&mut parser, "seed".to_string());
        assert_eq!(interp.data(), "seed");
        interp.data_mut().push_str("ling");
        assert_eq!(interp.into_data(), "seedling");
    }
}
