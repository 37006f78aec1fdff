//! Lexer splitting command text into space-separated tokens.

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'input> {
    /// The token text, borrowed from the input.
    pub text: &'input str,
    /// The byte position in the input where this token starts.
    pub pos: usize,
}

/// Lexer yielding every run of non-space bytes in the input.
///
/// Only the ASCII space separates tokens: tabs and newlines are part of the
/// token they appear in. Runs of spaces never produce empty tokens.
pub(crate) struct Lexer<'input> {
    input: &'input str,
    pos: usize,
}

impl<'input> Lexer<'input> {
    /// Create a new lexer for the given input.
    #[must_use]
    pub(crate) fn new(input: &'input str) -> Self {
        Self { input, pos: 0 }
    }

    /// Skip spaces.
    fn skip_spaces(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos] == b' ' {
            self.pos += 1;
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Token<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_spaces();

        let bytes = self.input.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos] != b' ' {
            self.pos += 1;
        }

        // Both ends sit next to an ASCII space or the input bounds, so they
        // are char boundaries.
        Some(Token {
            text: &self.input[start..self.pos],
            pos: start,
        })
    }
}
