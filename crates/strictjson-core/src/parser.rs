//! Structural phase: recursive descent over the token sequence.
//!
//! The token list is produced up front by [`crate::lexer::tokenize`]; this module
//! walks it with a single forward cursor and no backtracking.
//!
//! ```text
//! document := ('{' object | '[' array) <end of tokens>
//! value    := '{' object | '[' array | string | number | true | false | null
//! array    := ']' | value (',' value)* ']'
//! object   := '}' | string ':' value (',' string ':' value)* '}'
//! ```
//!
//! Object keys must be unique within one object; a repeated key is a hard
//! error, never an overwrite.

use std::path::Path;

use crate::error::{ParseError, Result};
use crate::lexer::{tokenize, Punct, Token, TokenKind};
use crate::node::{Node, ObjectMap, Slot};

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Parse JSON text into a node. The top level must be an object or an array.
pub fn parse(text: &str) -> Result<Node> {
    let tokens = tokenize(text)?;
    Ok(parse_document(&tokens, text.len())?)
}

/// Read `path` fully and parse its contents.
pub fn parse_file(path: &Path) -> Result<Node> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::File {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Build a node from an already tokenized document.
///
/// `input_len` is the byte length of the source text, reported as the offset
/// of end-of-input errors.
pub fn parse_document(tokens: &[Token], input_len: usize) -> ParseResult<Node> {
    let mut parser = Parser {
        tokens,
        cursor: 0,
        input_len,
    };

    match parser.peek() {
        None => return Err(parser.eof("expected start of JSON")),
        Some(Token {
            kind: TokenKind::Punct(Punct::OpenCurly | Punct::OpenSquare),
            ..
        }) => {}
        Some(token) => return Err(unexpected(token, "expected start of JSON")),
    }

    let root = match parser.parse_value()? {
        Slot::Node(node) => node,
        other => {
            return Err(ParseError::Internal(format!(
                "top-level value parsed as {}",
                other.type_name()
            )));
        }
    };

    if let Some(token) = parser.peek() {
        return Err(unexpected(token, "expected end of JSON"));
    }

    Ok(root)
}

struct Parser<'t> {
    tokens: &'t [Token],
    cursor: usize,
    input_len: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    fn eof(&self, message: &str) -> ParseError {
        ParseError::UnexpectedEof {
            message: message.to_string(),
            offset: self.input_len,
        }
    }

    /// Consume one value. Containers recurse; scalar tokens are the value itself.
    fn parse_value(&mut self) -> ParseResult<Slot> {
        let token = self.advance().ok_or_else(|| self.eof("expected value"))?;
        let slot = match &token.kind {
            TokenKind::Punct(Punct::OpenSquare) => Slot::Node(self.parse_array()?),
            TokenKind::Punct(Punct::OpenCurly) => Slot::Node(self.parse_object()?),
            TokenKind::Punct(_) => return Err(unexpected(token, "expected value")),
            TokenKind::String(s) => Slot::String(s.clone()),
            TokenKind::Number(n) => Slot::Number(*n),
            TokenKind::Bool(b) => Slot::Bool(*b),
            TokenKind::Null => Slot::Null,
        };
        Ok(slot)
    }

    /// Called with the cursor just past `[`.
    fn parse_array(&mut self) -> ParseResult<Node> {
        let mut items = Vec::new();

        if self.peek().is_some_and(|t| t.is_punct(Punct::CloseSquare)) {
            self.cursor += 1;
            return Ok(Node::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            match self.advance() {
                Some(t) if t.is_punct(Punct::CloseSquare) => return Ok(Node::Array(items)),
                Some(t) if t.is_punct(Punct::Comma) => continue,
                Some(t) => return Err(unexpected(t, "expected ',' or ']'")),
                None => return Err(self.eof("expected end of array")),
            }
        }
    }

    /// Called with the cursor just past `{`.
    fn parse_object(&mut self) -> ParseResult<Node> {
        let mut map = ObjectMap::new();

        if self.peek().is_some_and(|t| t.is_punct(Punct::CloseCurly)) {
            self.cursor += 1;
            return Ok(Node::Object(map));
        }

        loop {
            let key_token = self.advance().ok_or_else(|| self.eof("expected key"))?;
            let TokenKind::String(key) = &key_token.kind else {
                return Err(unexpected(key_token, "expected key"));
            };

            if map.contains_key(key) {
                return Err(ParseError::DuplicatedKey {
                    key: key.clone(),
                    offset: key_token.offset,
                });
            }

            match self.advance() {
                Some(t) if t.is_punct(Punct::Colon) => {}
                Some(t) => return Err(unexpected(t, "expected ':'")),
                None => return Err(self.eof("expected ':'")),
            }

            let value = self.parse_value()?;
            map.insert(key.clone(), value);

            match self.advance() {
                Some(t) if t.is_punct(Punct::CloseCurly) => return Ok(Node::Object(map)),
                Some(t) if t.is_punct(Punct::Comma) => continue,
                Some(t) => return Err(unexpected(t, "expected ',' or '}'")),
                None => return Err(self.eof("expected end of object")),
            }
        }
    }
}

fn unexpected(token: &Token, message: &str) -> ParseError {
    ParseError::UnexpectedChar {
        message: message.to_string(),
        found: token.kind.to_string(),
        offset: token.offset,
    }
}
