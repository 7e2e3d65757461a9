//! Tokenizer: splits raw JSON text into a flat sequence of tokens.
//!
//! The whole input is scanned eagerly, left to right. At each position the
//! lexer tries, in this order:
//!
//! 1. a string literal opened by `"` or `'`, closed by the same quote kind;
//! 2. a number literal, the maximal run of `[0-9-e.]`;
//! 3. one of the keywords `true`, `false`, `null`;
//! 4. a single structural character `{ } [ ] , :`;
//! 5. whitespace (space, tab, CR, LF), which is skipped.
//!
//! Anything else is a [`ParseError::UnexpectedChar`].

use std::fmt;

use crate::error::ParseError;

/// A single structural character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punct {
    OpenCurly,
    CloseCurly,
    OpenSquare,
    CloseSquare,
    Comma,
    Colon,
}

impl Punct {
    fn from_byte(byte: u8) -> Option<Punct> {
        match byte {
            b'{' => Some(Punct::OpenCurly),
            b'}' => Some(Punct::CloseCurly),
            b'[' => Some(Punct::OpenSquare),
            b']' => Some(Punct::CloseSquare),
            b',' => Some(Punct::Comma),
            b':' => Some(Punct::Colon),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Punct::OpenCurly => '{',
            Punct::CloseCurly => '}',
            Punct::OpenSquare => '[',
            Punct::CloseSquare => ']',
            Punct::Comma => ',',
            Punct::Colon => ':',
        }
    }
}

/// What a token is. String contents are already unescaped and numbers
/// already converted.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Punct(Punct),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::String(s) => write!(f, "string {s:?}"),
            TokenKind::Number(n) => write!(f, "number {n}"),
            TokenKind::Bool(b) => write!(f, "'{b}'"),
            TokenKind::Null => f.write_str("'null'"),
            TokenKind::Punct(p) => write!(f, "'{}'", p.as_char()),
        }
    }
}

/// A token plus the byte offset where it starts in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    pub fn is_punct(&self, punct: Punct) -> bool {
        self.kind == TokenKind::Punct(punct)
    }
}

const KEYWORDS: [(&str, TokenKind); 3] = [
    ("true", TokenKind::Bool(true)),
    ("false", TokenKind::Bool(false)),
    ("null", TokenKind::Null),
];

fn is_quote(byte: u8) -> bool {
    matches!(byte, b'"' | b'\'')
}

fn is_number_byte(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9' | b'-' | b'e' | b'.')
}

fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Tokenize the whole input.
///
/// ```
/// use strictjson_core::lexer::{tokenize, Punct, TokenKind};
///
/// let tokens = tokenize("[1]").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Punct(Punct::OpenSquare),
///         TokenKind::Number(1.0),
///         TokenKind::Punct(Punct::CloseSquare),
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    Lexer { input, pos: 0 }.run()
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn run(mut self) -> Result<Vec<Token>, ParseError> {
        let input = self.input;
        let bytes = input.as_bytes();
        let mut tokens = Vec::new();

        while self.pos < bytes.len() {
            let offset = self.pos;
            let byte = bytes[offset];

            let kind = if let Some(kind) = self.eject_string()? {
                kind
            } else if let Some(kind) = self.eject_number()? {
                kind
            } else if let Some(kind) = self.eject_keyword() {
                kind
            } else if let Some(punct) = Punct::from_byte(byte) {
                self.pos += 1;
                TokenKind::Punct(punct)
            } else if is_space(byte) {
                self.pos += 1;
                continue;
            } else {
                return Err(self.unexpected_char());
            };

            tokens.push(Token { kind, offset });
        }

        Ok(tokens)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn unexpected_char(&self) -> ParseError {
        let found = self
            .rest()
            .chars()
            .next()
            .map(|c| format!("{c:?}"))
            .unwrap_or_default();
        ParseError::UnexpectedChar {
            message: "not a valid JSON token".to_string(),
            found,
            offset: self.pos,
        }
    }

    /// Scans a quoted literal. It ends at the first quote of the opening kind
    /// that is not immediately preceded by a backslash, so `"a\\"` is still open.
    fn eject_string(&mut self) -> Result<Option<TokenKind>, ParseError> {
        let input = self.input;
        let bytes = input.as_bytes();
        let quote = bytes[self.pos];
        if !is_quote(quote) {
            return Ok(None);
        }

        let start = self.pos + 1;
        let mut i = start;
        loop {
            match bytes.get(i) {
                None => {
                    return Err(ParseError::UnexpectedEof {
                        message: "expected end of the string".to_string(),
                        offset: input.len(),
                    });
                }
                Some(&b) if b == quote && bytes[i - 1] != b'\\' => break,
                Some(_) => i += 1,
            }
        }

        let raw = &input[start..i];
        self.pos = i + 1;
        Ok(Some(TokenKind::String(unescape(raw))))
    }

    fn eject_number(&mut self) -> Result<Option<TokenKind>, ParseError> {
        let input = self.input;
        let bytes = input.as_bytes();
        if !is_number_byte(bytes[self.pos]) {
            return Ok(None);
        }

        let start = self.pos;
        let end = bytes[start..]
            .iter()
            .position(|&b| !is_number_byte(b))
            .map_or(bytes.len(), |n| start + n);

        let literal = &input[start..end];
        let value = literal
            .parse::<f64>()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| ParseError::CannotParseNumber {
                literal: literal.to_string(),
                offset: start,
            })?;

        self.pos = end;
        Ok(Some(TokenKind::Number(value)))
    }

    fn eject_keyword(&mut self) -> Option<TokenKind> {
        let rest = self.rest();
        for (word, kind) in KEYWORDS.iter() {
            if !rest.starts_with(word) {
                continue;
            }
            let bounded = rest
                .as_bytes()
                .get(word.len())
                .is_none_or(|&b| !is_word_byte(b));
            if bounded {
                self.pos += word.len();
                return Some(kind.clone());
            }
        }
        None
    }
}

/// Replace the recognised escape sequences (`\\`, `\"`, `\'`, `\n`, `\t`).
/// Any other backslash sequence is kept as written.
fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
