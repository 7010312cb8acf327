//! jsonpick - parse JSON text and pick values by dotted key paths.
//!
//! The crate turns a JSON-formatted string into an in-memory [`Value`] tree
//! and supports retrieving nested values by key paths such as `"a.b.c"`.
//!
//! # Architecture
//!
//! The pipeline is source text → [`Lexer`] → token sequence → [`Parser`] →
//! value tree, with path lookup and rendering on the result:
//!
//! - [`token`] - lexical categories and the concrete token value
//! - [`lexer`] - text to ordered token sequence
//! - [`parser`] - recursive descent over tokens into a [`Value`]
//! - [`value`] - the tagged union of JSON values and path lookup
//! - [`render`] - deterministic, indented display rendering
//! - [`error`] - structured lexical/grammar/lookup errors
//!
//! # Example
//!
//! ```
//! use jsonpick::{get_value, parse, Value};
//!
//! let root = parse(r#"{"A":"a", "B": {"C":1, "D":2}, "E":9}"#).unwrap();
//! assert_eq!(root.get_dotted("B.D").unwrap(), &Value::Number(2.0));
//!
//! let d = get_value(r#"{"B": {"D": 2}}"#, &["B", "D"]).unwrap();
//! assert_eq!(d, Value::Number(2.0));
//! ```

// Library code must avoid unwrap/expect/panic; errors surface as Results.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use error::{Error, Result};
pub use lexer::Lexer;
pub use parser::Parser;
pub use render::render;
pub use token::{Token, TokenKind};
pub use value::Value;

/// Parse JSON text into a value tree.
///
/// This is the sole entry point combining lexing and parsing. It is a pure
/// function of its input: the same text always yields a structurally equal
/// tree or the same error.
pub fn parse(input: &str) -> Result<Value> {
    let tokens = Lexer::new(input).scan_tokens()?;
    let mut parser = Parser::new(&tokens);
    parser.parse()
}

/// Parse JSON text and look up the value at the given key path.
///
/// The root of the document must be an object, since path lookup only
/// descends objects.
pub fn get_value(input: &str, path: &[&str]) -> Result<Value> {
    let root = parse(input)?;
    root.get_path(path).cloned()
}
