//! # strictjson-core
//!
//! A strict JSON value model and a hand-written two-phase parser.
//!
//! Parsing first splits the whole input into tokens ([`lexer`]), then walks the
//! token list by recursive descent ([`parser`]) to build a [`Node`] tree. Input is
//! validated strictly: the top level must be an object or an array, object keys
//! must be unique, malformed numbers and stray characters are rejected, and any
//! error aborts the parse.
//!
//! ## Quick start
//!
//! ```rust
//! use strictjson_core::{Node, Slot};
//!
//! let mut doc = Node::parse(r#"{"name": "Ivan", "marks": [4, 5, 5]}"#).unwrap();
//! assert_eq!(doc.get("name").unwrap().as_str(), Some("Ivan"));
//!
//! let marks = doc.get_mut("marks").unwrap().as_node_mut().unwrap();
//! marks.append(3).unwrap();
//! assert_eq!(marks.size(), 4);
//! assert_eq!(marks.get(3).unwrap(), &Slot::Number(3.0));
//! ```
//!
//! ## Modules
//!
//! - [`node`] — `Node`/`Slot` value model and its accessors
//! - [`lexer`] — text → flat token list
//! - [`parser`] — token list → `Node` tree, plus `parse`/`parse_file`
//! - [`error`] — `JsonError` and `ParseError`
//! - `ser` — `serde::Serialize` for `Node` and `Slot`

pub mod error;
pub mod lexer;
pub mod node;
pub mod parser;
mod ser;

pub use error::{JsonError, ParseError, Result};
pub use node::{Locator, Node, Slot};
pub use parser::{parse, parse_file};
