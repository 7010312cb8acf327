//! Error types for lexing, parsing, and path lookup.
//!
//! Every fallible operation in this crate returns a structured [`Error`]
//! instead of panicking or calling into a global error hook. The first error
//! encountered terminates the operation; no recovery is attempted.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors surfaced by the lexer, the parser, and path lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed token: unterminated string, bad escape, bad number,
    /// unrecognized identifier or character.
    #[error("lexical error at line {line}: {message}")]
    Lexical {
        /// 1-indexed source line where the error was detected.
        line: usize,
        /// Human-readable description of the problem.
        message: String,
    },

    /// Token sequence does not match the grammar at the current position.
    #[error("grammar error at {token}: {message}")]
    Grammar {
        /// Description of the offending token.
        token: String,
        /// Human-readable description of what was expected.
        message: String,
    },

    /// Path lookup was invoked with an empty path.
    #[error("path is empty")]
    EmptyPath,

    /// A path segment is absent from the object it was resolved against.
    #[error("no key: {0}")]
    KeyNotFound(String),

    /// A path descends through a key whose value is not an object.
    #[error("{0}'s value is not an object")]
    NotAnObject(String),

    /// Path lookup was applied to a root value that is not an object.
    #[error("root value is not an object")]
    RootNotObject,
}

impl Error {
    /// Build a lexical error at the given source line.
    pub fn lexical(line: usize, message: impl Into<String>) -> Self {
        Error::Lexical {
            line,
            message: message.into(),
        }
    }

    /// Build a grammar error at the given token.
    pub fn grammar(token: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Grammar {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Returns true for lexer errors.
    pub fn is_lexical(&self) -> bool {
        matches!(self, Error::Lexical { .. })
    }

    /// Returns true for parser errors.
    pub fn is_grammar(&self) -> bool {
        matches!(self, Error::Grammar { .. })
    }

    /// Returns true for path lookup errors.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Error::EmptyPath | Error::KeyNotFound(_) | Error::NotAnObject(_) | Error::RootNotObject
        )
    }
}
