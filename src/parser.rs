//! Recursive-descent JSON parser.
//!
//! Consumes the token sequence produced by the [`Lexer`](crate::lexer::Lexer)
//! and builds a [`Value`] tree:
//!
//! ```text
//! value   := object | array | STRING | NUMBER | TRUE | FALSE | NULL
//! object  := '{' [ pair (',' pair)* ] '}'
//! pair    := STRING ':' value
//! array   := '[' [ value (',' value)* ] ']'
//! ```
//!
//! The first grammar violation aborts parsing; no partial tree is returned.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};
use crate::value::Value;

/// Maximum nesting depth for objects and arrays.
///
/// Hostile nesting becomes a grammar error instead of a stack overflow.
const MAX_NESTING_DEPTH: usize = 128;

/// Fallback for cursor positions past the end of the token slice. The lexer
/// always terminates the sequence with an `Eof` token, so this is only
/// reachable through a hand-built token slice.
static EOF_FALLBACK: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    line: 0,
};

/// Parser over a read-only token slice.
///
/// Created once per parse call; terminal upon producing a root [`Value`] or
/// the first error.
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over a token sequence terminated by `Eof`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parse the token sequence into a root value.
    ///
    /// Any value kind is accepted at the root; the token after it must be
    /// `Eof`.
    pub fn parse(&mut self) -> Result<Value> {
        let value = self.value()?;
        if !self.is_at_end() {
            return Err(self.error_at_current("expect end of input"));
        }
        Ok(value)
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&EOF_FALLBACK)
    }

    fn previous(&self) -> &Token {
        self.tokens
            .get(self.current.wrapping_sub(1))
            .unwrap_or(&EOF_FALLBACK)
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Non-consuming lookahead. False at end of input.
    fn check(&self, kind: &TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == *kind
    }

    /// Advance past the current token if it matches `kind`, otherwise fail
    /// with `message` at the offending token.
    fn consume(&mut self, kind: &TokenKind, message: &str) -> Result<&Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    fn error_at_current(&self, message: &str) -> Error {
        Error::grammar(self.peek().to_string(), message)
    }

    /// Dispatch on the current token kind to parse one value.
    fn value(&mut self) -> Result<Value> {
        match &self.peek().kind {
            TokenKind::String(s) => {
                let value = Value::String(s.clone());
                self.advance();
                Ok(value)
            }
            TokenKind::Number(n) => {
                let value = Value::Number(*n);
                self.advance();
                Ok(value)
            }
            TokenKind::True => {
                self.advance();
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Value::Bool(false))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Value::Null)
            }
            TokenKind::LeftBrace => self.object(),
            TokenKind::LeftBracket => self.array(),
            _ => Err(self.error_at_current("unsupported value type")),
        }
    }

    fn object(&mut self) -> Result<Value> {
        self.descend()?;
        self.consume(&TokenKind::LeftBrace, "expect `{`")?;

        let mut map = BTreeMap::new();
        if !self.check(&TokenKind::RightBrace) {
            loop {
                let (key, value) = self.pair()?;
                // Duplicate keys: last occurrence wins.
                map.insert(key, value);
                if !self.check(&TokenKind::Comma) {
                    break;
                }
                self.advance();
            }
        }

        self.consume(&TokenKind::RightBrace, "expect `}` after object members")?;
        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn pair(&mut self) -> Result<(String, Value)> {
        let key = match &self.peek().kind {
            TokenKind::String(s) => {
                let key = s.clone();
                self.advance();
                key
            }
            _ => return Err(self.error_at_current("expect key")),
        };

        self.consume(&TokenKind::Colon, "expect `:` after key")?;
        let value = self.value()?;
        Ok((key, value))
    }

    fn array(&mut self) -> Result<Value> {
        self.descend()?;
        self.consume(&TokenKind::LeftBracket, "expect `[`")?;

        let mut items = Vec::new();
        if !self.check(&TokenKind::RightBracket) {
            loop {
                items.push(self.value()?);
                if !self.check(&TokenKind::Comma) {
                    break;
                }
                self.advance();
            }
        }

        self.consume(&TokenKind::RightBracket, "expect `]` after array elements")?;
        self.depth -= 1;
        Ok(Value::Array(items))
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.error_at_current("nesting too deep"));
        }
        Ok(())
    }
}
