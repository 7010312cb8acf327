//! JSON lexer.
//!
//! Converts raw JSON text into the complete ordered token sequence, decoding
//! escape sequences and validating numeric literals along the way. The first
//! lexical error aborts the scan; no partial token sequence is returned.

use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};

/// Single-pass scanner over JSON source text.
///
/// Created once per parse call and consumed by [`Lexer::scan_tokens`].
pub struct Lexer {
    chars: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl Lexer {
    /// Create a lexer for the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scan the entire source, returning the token sequence terminated by
    /// exactly one [`TokenKind::Eof`] carrying the final line number.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, "", self.line));
        Ok(self.tokens)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    /// Consume and return the current character. Callers must have checked
    /// that the input is not exhausted.
    fn advance(&mut self) -> char {
        let c = self.chars.get(self.current).copied().unwrap_or('\0');
        self.current += 1;
        c
    }

    /// Consume the current character, failing mid-token at end of input.
    fn next_char(&mut self, message: &str) -> Result<char> {
        match self.peek() {
            Some(c) => {
                self.current += 1;
                Ok(c)
            }
            None => Err(Error::lexical(self.line, message)),
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.chars[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();
        match c {
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            '[' => self.add_token(TokenKind::LeftBracket),
            ']' => self.add_token(TokenKind::RightBracket),
            ':' => self.add_token(TokenKind::Colon),
            ',' => self.add_token(TokenKind::Comma),
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string()?,
            c if c.is_ascii_digit() || c == '-' => self.number()?,
            c if c.is_ascii_alphabetic() || c == '_' => self.keyword()?,
            _ => return Err(Error::lexical(self.line, "unexpected token")),
        }
        Ok(())
    }

    /// Scan a string literal. The opening quote has been consumed.
    ///
    /// Escape sequences are decoded here, so the token's literal carries the
    /// unescaped text while its lexeme keeps the raw quoted span. A raw
    /// newline or end of input before the closing quote is an error.
    fn string(&mut self) -> Result<()> {
        let mut decoded = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(Error::lexical(self.line, "unterminated string"));
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    decoded.push(self.escape_sequence()?);
                }
                Some(c) if (c as u32) < 0x20 => {
                    return Err(Error::lexical(self.line, "control character in string"));
                }
                Some(c) => {
                    self.advance();
                    decoded.push(c);
                }
            }
        }
        self.add_token(TokenKind::String(decoded));
        Ok(())
    }

    /// Decode one escape sequence. The backslash has been consumed.
    fn escape_sequence(&mut self) -> Result<char> {
        match self.next_char("unterminated string")? {
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            '/' => Ok('/'),
            'b' => Ok('\u{0008}'),
            'f' => Ok('\u{000C}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => self.unicode_escape(),
            _ => Err(Error::lexical(self.line, "unknown escape sequence")),
        }
    }

    /// Decode a `\uXXXX` escape, combining surrogate pairs into a single
    /// character. Unpaired surrogates are rejected.
    fn unicode_escape(&mut self) -> Result<char> {
        let unit = self.hex4()?;

        if (0xD800..=0xDBFF).contains(&unit) {
            // High surrogate: a `\uXXXX` low surrogate must follow.
            if self.next_char("unterminated string")? != '\\'
                || self.next_char("unterminated string")? != 'u'
            {
                return Err(Error::lexical(self.line, "unpaired surrogate in string"));
            }
            let low = self.hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(Error::lexical(self.line, "unpaired surrogate in string"));
            }
            let code = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
            return char::from_u32(code)
                .ok_or_else(|| Error::lexical(self.line, "invalid unicode escape"));
        }

        if (0xDC00..=0xDFFF).contains(&unit) {
            return Err(Error::lexical(self.line, "unpaired surrogate in string"));
        }

        char::from_u32(u32::from(unit))
            .ok_or_else(|| Error::lexical(self.line, "invalid unicode escape"))
    }

    /// Read four hexadecimal digits.
    fn hex4(&mut self) -> Result<u16> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let c = self.next_char("unterminated string")?;
            let digit = c
                .to_digit(16)
                .ok_or_else(|| Error::lexical(self.line, "invalid unicode escape"))?;
            value = (value << 4) | digit as u16;
        }
        Ok(value)
    }

    /// Scan a number literal. The leading digit or minus sign has been
    /// consumed. Enforces the strict JSON number grammar: no leading zeros,
    /// digits required after the decimal point and the exponent marker.
    fn number(&mut self) -> Result<()> {
        if self.chars[self.start] == '-' {
            match self.peek() {
                Some(c) if c.is_ascii_digit() => {
                    self.advance();
                }
                _ => return Err(Error::lexical(self.line, "invalid number")),
            }
        }

        let first_digit = self.chars[self.current - 1];
        if first_digit == '0' {
            if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                return Err(Error::lexical(self.line, "invalid number"));
            }
        } else {
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek() == Some('.') {
            self.advance();
            if !matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                return Err(Error::lexical(self.line, "invalid number"));
            }
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            if !matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                return Err(Error::lexical(self.line, "invalid number"));
            }
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme: String = self.chars[self.start..self.current].iter().collect();
        let literal: f64 = lexeme
            .parse()
            .map_err(|_| Error::lexical(self.line, "invalid number"))?;
        self.add_token(TokenKind::Number(literal));
        Ok(())
    }

    /// Scan an identifier-like run and match it against the keyword set.
    fn keyword(&mut self) -> Result<()> {
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.advance();
        }

        let word: String = self.chars[self.start..self.current].iter().collect();
        let kind = match word.as_str() {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => return Err(Error::lexical(self.line, "unexpected value")),
        };
        self.add_token(kind);
        Ok(())
    }
}
