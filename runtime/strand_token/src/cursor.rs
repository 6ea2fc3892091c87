//! Forward-only cursor over a token sequence.
//!
//! The cursor is initialized in two phases: [`TokenCursor::empty`] creates a
//! cursor whose lookbehind is the unset sentinel, and [`TokenCursor::prime`]
//! assigns the parsed token sequence into it. Priming does not touch the
//! lookbehind baseline: until the first real `consume`, `lookbehind` keeps
//! returning `None`. Downstream interpreters rely on that baseline, so the
//! two phases must stay separate operations.

use std::collections::VecDeque;

/// Strictly forward, single-pass cursor over tokens of type `T`.
///
/// Supports one-token lookahead and one-token lookbehind. There is no random
/// access and no rewind; once a token has been consumed the only memory of it
/// is the `current`/`previous` pair.
///
/// # Invariant
///
/// `previous` always holds the value `current` had immediately before the
/// most recent [`consume`](Self::consume) call. Before any consume, both are
/// unset.
#[derive(Clone, Debug)]
pub struct TokenCursor<T> {
    /// Unconsumed tokens, front = next.
    remaining: VecDeque<T>,
    /// Last token returned by `consume`.
    current: Option<T>,
    /// The token `current` held before the latest `consume`.
    previous: Option<T>,
}

impl<T> TokenCursor<T> {
    /// Create a cursor with no tokens and an unset lookbehind baseline.
    ///
    /// This is phase one of initialization; call [`prime`](Self::prime) to
    /// assign the token sequence.
    pub fn empty() -> Self {
        TokenCursor {
            remaining: VecDeque::new(),
            current: None,
            previous: None,
        }
    }

    /// Assign the parsed token sequence into the cursor.
    ///
    /// Phase two of initialization. Leaves `current` and `previous` exactly
    /// as they were, so a freshly primed cursor still reports the unset
    /// lookbehind sentinel.
    pub fn prime(&mut self, tokens: impl IntoIterator<Item = T>) {
        self.remaining = tokens.into_iter().collect();
    }

    /// One-step construction for callers that do not need the explicit
    /// two-phase contract.
    pub fn from_tokens(tokens: impl IntoIterator<Item = T>) -> Self {
        let mut cursor = TokenCursor::empty();
        cursor.prime(tokens);
        cursor
    }

    /// Consume the next token and advance.
    ///
    /// Before advancing, the old `current` value becomes the new lookbehind
    /// value. Returns `None` once the sequence is exhausted; further calls
    /// keep returning `None` (and keep shifting `current` into `previous`,
    /// so one extra consume past the end leaves the last token visible via
    /// `lookbehind` and nothing after that).
    pub fn consume(&mut self) -> Option<&T> {
        self.previous = self.current.take();
        self.current = self.remaining.pop_front();
        self.current.as_ref()
    }

    /// Peek at the next token without consuming it.
    ///
    /// Never mutates `current` or `previous`. Returns `None` if exhausted.
    #[inline]
    pub fn lookahead(&self) -> Option<&T> {
        self.remaining.front()
    }

    /// The token that was `current` just prior to the last `consume` call.
    ///
    /// Returns `None` until the second consume has happened, and `None`
    /// again on a cursor that has never consumed at all.
    #[inline]
    pub fn lookbehind(&self) -> Option<&T> {
        self.previous.as_ref()
    }

    /// The last token returned by `consume`, if any.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Returns `true` once every token has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of tokens not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

impl<T> Default for TokenCursor<T> {
    fn default() -> Self {
        TokenCursor::empty()
    }
}

impl<T> FromIterator<T> for TokenCursor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TokenCursor::from_tokens(iter)
    }
}
