//! Lexical tokens produced by the [`Lexer`](crate::lexer::Lexer).
//!
//! A token records its classification, the raw source span it was derived
//! from, and the line it started on. Decoded literal values (unescaped string
//! text, parsed numbers) ride in the [`TokenKind::String`] and
//! [`TokenKind::Number`] variants.

use std::fmt;

/// The classification of a [`Token`].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A string literal, carrying the unescaped text.
    String(String),
    /// A number literal, carrying the parsed value.
    Number(f64),
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    Null,
    /// End of input. Exactly one `Eof` terminates every token sequence.
    Eof,
}

/// A single classified, positioned lexical unit.
///
/// Tokens are immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classification, including any decoded literal value.
    pub kind: TokenKind,
    /// The raw source substring this token was derived from.
    pub lexeme: String,
    /// The 1-indexed line the token started on.
    pub line: usize,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

/// Describes the token for diagnostics, e.g. `` `}` (line 3) ``.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input (line {})", self.line),
            _ => write!(f, "`{}` (line {})", self.lexeme, self.line),
        }
    }
}
