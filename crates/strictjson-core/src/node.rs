//! The JSON value model.
//!
//! A [`Node`] is a container: an object, an array, or [`Node::Empty`] when it was
//! never populated. Entries of a container are [`Slot`]s, each holding a scalar
//! or a nested node that the container owns exclusively.
//!
//! # Key design decisions
//!
//! - **Closed slot variant**: `Slot` is a plain enum over string, number, bool,
//!   null and nested node, so type mismatches are `match` arms rather than runtime
//!   type inspection.
//! - **`Empty` vs `Null`**: node-level absence (`Node::Empty`) and a JSON `null`
//!   stored in a container (`Slot::Null`) are different types and cannot be confused.
//! - **Copy and move**: `Clone` is a deep copy. [`Node::take`] moves the content out
//!   and leaves `Empty` in the source.
//! - **Insert overwrites**: programmatic [`Node::insert`] replaces an existing key,
//!   while the parser rejects duplicate keys with `ParseError::DuplicatedKey`.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use crate::error::{JsonError, Result};
use crate::parser;

/// Storage of a JSON object.
pub type ObjectMap = BTreeMap<String, Slot>;

/// Storage of a JSON array.
pub type ArrayVec = Vec<Slot>;

/// A JSON document node: an object, an array, or neither.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Default-constructed, never populated. Not the same as a JSON `null`.
    #[default]
    Empty,
    Object(ObjectMap),
    Array(ArrayVec),
}

/// One entry inside an object or array.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// JSON `null`.
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Node(Node),
}

impl Node {
    /// An empty node, neither object nor array.
    pub fn new() -> Node {
        Node::Empty
    }

    /// An object with no entries.
    pub fn object() -> Node {
        Node::Object(ObjectMap::new())
    }

    /// An array with no entries.
    pub fn array() -> Node {
        Node::Array(ArrayVec::new())
    }

    /// Parse JSON text. The top level must be an object or an array.
    ///
    /// ```
    /// use strictjson_core::Node;
    ///
    /// let node = Node::parse(r#"{"a": 1, "b": [true, null]}"#).unwrap();
    /// assert!(node.is_object());
    /// assert_eq!(node.size(), 2);
    /// assert_eq!(node.get("a").unwrap().as_f64(), Some(1.0));
    /// ```
    pub fn parse(text: &str) -> Result<Node> {
        parser::parse(text)
    }

    /// Read a whole file and parse its contents.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Node> {
        parser::parse_file(path.as_ref())
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// True iff the node is neither an object nor an array.
    ///
    /// An object or array with no entries is *not* empty in this sense.
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Number of entries; 0 for [`Node::Empty`].
    pub fn size(&self) -> usize {
        match self {
            Node::Empty => 0,
            Node::Object(map) => map.len(),
            Node::Array(items) => items.len(),
        }
    }

    /// All keys of an object, in sorted order.
    pub fn keys(&self) -> Result<Vec<&str>> {
        Ok(self.as_object()?.keys().map(String::as_str).collect())
    }

    /// The slot at `at`: a key for objects, a 0-based index for arrays.
    pub fn get<L: Locator>(&self, at: L) -> Result<&Slot> {
        at.locate(self)
    }

    /// Mutable access to the slot at `at`.
    pub fn get_mut<L: Locator>(&mut self, at: L) -> Result<&mut Slot> {
        at.locate_mut(self)
    }

    /// Insert or overwrite `key`, returning the slot it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Slot>,
    ) -> Result<Option<Slot>> {
        Ok(self.as_object_mut()?.insert(key.into(), value.into()))
    }

    /// Append to the end of an array.
    pub fn append(&mut self, value: impl Into<Slot>) -> Result<()> {
        self.as_array_mut()?.push(value.into());
        Ok(())
    }

    /// Move the content out, leaving [`Node::Empty`] behind.
    pub fn take(&mut self) -> Node {
        std::mem::take(self)
    }

    pub fn as_object(&self) -> Result<&ObjectMap> {
        match self {
            Node::Object(map) => Ok(map),
            _ => Err(expected_object()),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut ObjectMap> {
        match self {
            Node::Object(map) => Ok(map),
            _ => Err(expected_object()),
        }
    }

    pub fn as_array(&self) -> Result<&ArrayVec> {
        match self {
            Node::Array(items) => Ok(items),
            _ => Err(expected_array()),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut ArrayVec> {
        match self {
            Node::Array(items) => Ok(items),
            _ => Err(expected_array()),
        }
    }
}

fn expected_object() -> JsonError {
    JsonError::UnexpectedType("expected JSON object".to_string())
}

fn expected_array() -> JsonError {
    JsonError::UnexpectedType("expected JSON array".to_string())
}

impl FromStr for Node {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Node> {
        Node::parse(s)
    }
}

impl From<ObjectMap> for Node {
    fn from(map: ObjectMap) -> Node {
        Node::Object(map)
    }
}

impl From<ArrayVec> for Node {
    fn from(items: ArrayVec) -> Node {
        Node::Array(items)
    }
}

impl<K: Into<String>, V: Into<Slot>> FromIterator<(K, V)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Node {
        Node::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl FromIterator<Slot> for Node {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Node {
        Node::Array(iter.into_iter().collect())
    }
}

/// Something that can address a slot inside a [`Node`]: a `&str`/`String` key
/// for objects or a `usize` index for arrays.
pub trait Locator: private::Sealed {
    fn locate<'n>(&self, node: &'n Node) -> Result<&'n Slot>;

    fn locate_mut<'n>(&self, node: &'n mut Node) -> Result<&'n mut Slot>;
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: Sealed + ?Sized> Sealed for &T {}
}

impl Locator for usize {
    fn locate<'n>(&self, node: &'n Node) -> Result<&'n Slot> {
        node.as_array()?
            .get(*self)
            .ok_or_else(|| missing_index(*self))
    }

    fn locate_mut<'n>(&self, node: &'n mut Node) -> Result<&'n mut Slot> {
        node.as_array_mut()?
            .get_mut(*self)
            .ok_or_else(|| missing_index(*self))
    }
}

impl Locator for str {
    fn locate<'n>(&self, node: &'n Node) -> Result<&'n Slot> {
        node.as_object()?
            .get(self)
            .ok_or_else(|| missing_key(self))
    }

    fn locate_mut<'n>(&self, node: &'n mut Node) -> Result<&'n mut Slot> {
        node.as_object_mut()?
            .get_mut(self)
            .ok_or_else(|| missing_key(self))
    }
}

impl Locator for String {
    fn locate<'n>(&self, node: &'n Node) -> Result<&'n Slot> {
        self.as_str().locate(node)
    }

    fn locate_mut<'n>(&self, node: &'n mut Node) -> Result<&'n mut Slot> {
        self.as_str().locate_mut(node)
    }
}

impl<T: Locator + ?Sized> Locator for &T {
    fn locate<'n>(&self, node: &'n Node) -> Result<&'n Slot> {
        (**self).locate(node)
    }

    fn locate_mut<'n>(&self, node: &'n mut Node) -> Result<&'n mut Slot> {
        (**self).locate_mut(node)
    }
}

fn missing_key(key: &str) -> JsonError {
    JsonError::UnexpectedKey(format!("expected JSON object key: {key}"))
}

fn missing_index(index: usize) -> JsonError {
    JsonError::UnexpectedKey(format!("expected JSON array index: {index}"))
}

impl Slot {
    pub fn is_null(&self) -> bool {
        matches!(self, Slot::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Slot::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Slot::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Slot::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Slot::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Slot::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Short name of the held variant, for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Slot::Null => "null",
            Slot::Bool(_) => "boolean",
            Slot::Number(_) => "number",
            Slot::String(_) => "string",
            Slot::Node(Node::Object(_)) => "object",
            Slot::Node(Node::Array(_)) => "array",
            Slot::Node(Node::Empty) => "empty node",
        }
    }
}

impl From<bool> for Slot {
    fn from(b: bool) -> Slot {
        Slot::Bool(b)
    }
}

impl From<f64> for Slot {
    fn from(n: f64) -> Slot {
        Slot::Number(n)
    }
}

impl From<i32> for Slot {
    fn from(n: i32) -> Slot {
        Slot::Number(f64::from(n))
    }
}

impl From<&str> for Slot {
    fn from(s: &str) -> Slot {
        Slot::String(s.to_string())
    }
}

impl From<String> for Slot {
    fn from(s: String) -> Slot {
        Slot::String(s)
    }
}

impl From<Node> for Slot {
    fn from(node: Node) -> Slot {
        Slot::Node(node)
    }
}

impl<T: Into<Slot>> From<Option<T>> for Slot {
    fn from(value: Option<T>) -> Slot {
        value.map_or(Slot::Null, Into::into)
    }
}
