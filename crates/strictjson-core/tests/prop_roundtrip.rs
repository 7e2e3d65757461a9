/// Property-based tests for the parser and value model.
///
/// Random JSON documents are generated as `serde_json::Value`s, rendered to
/// text by `serde_json`, and fed through `Node::parse`. Serializing the parsed
/// node back to a `serde_json::Value` must give the original document.
///
/// Generated content stays inside what the tokenizer understands:
/// - strings use only the escapes `\\`, `\"`, `\n`, `\t` (no `\uXXXX` control chars)
///   and never end with a backslash, whose escape would hide the closing quote
/// - numbers are integers or non-integral halves, so integer/float identity survives
/// - the root is always an object or an array
use proptest::prelude::*;
use serde_json::{Map, Number, Value};
use strictjson_core::{Node, Slot};

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,10}").unwrap()
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}",
        prop::string::string_regex(r#"[a-zA-Z0-9 _'.,:/\[\]{}"\\\-\t\n]{0,20}"#)
            .unwrap()
            .prop_filter("trailing backslash escapes the closing quote", |s| {
                !s.ends_with('\\')
            }),
        Just(String::new()),
        Just("true".to_string()),
        Just("null".to_string()),
        Just("-1.5".to_string()),
        Just("caf\u{00e9}".to_string()),
        Just("say \"hi\"".to_string()),
        Just("back\\slash".to_string()),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000i64).prop_map(|n| Value::Number(Number::from(n))),
        (-10_000i64..10_000i64).prop_map(|n| {
            let half = n as f64 + 0.5;
            Value::Number(Number::from_f64(half).unwrap())
        }),
        arb_string().prop_map(Value::String),
    ]
}

fn arb_object(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Value> {
    prop::collection::btree_map(arb_key(), inner, 0..6)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<String, Value>>()))
}

fn arb_array(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Value> {
    prop::collection::vec(inner, 0..6).prop_map(Value::Array)
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 48, 6, |inner| {
        prop_oneof![arb_array(inner.clone()), arb_object(inner)]
    })
}

/// A document root: always an object or an array.
fn arb_document() -> impl Strategy<Value = Value> {
    prop_oneof![arb_array(arb_value()), arb_object(arb_value())]
}

fn container_len(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        _ => 0,
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn compact_text_roundtrips(doc in arb_document()) {
        let text = serde_json::to_string(&doc).unwrap();
        let node = Node::parse(&text).unwrap();
        prop_assert_eq!(serde_json::to_value(&node).unwrap(), doc.clone());
        prop_assert_eq!(node.size(), container_len(&doc));
        prop_assert_eq!(node.is_array(), doc.is_array());
        prop_assert_eq!(node.is_object(), doc.is_object());
    }

    #[test]
    fn pretty_text_roundtrips(doc in arb_document()) {
        let text = serde_json::to_string_pretty(&doc).unwrap();
        let node = Node::parse(&text).unwrap();
        prop_assert_eq!(serde_json::to_value(&node).unwrap(), doc);
    }

    #[test]
    fn clone_is_independent(doc in arb_document()) {
        let text = serde_json::to_string(&doc).unwrap();
        let original = Node::parse(&text).unwrap();
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        match &mut copy {
            Node::Array(items) => {
                items.push(Slot::from("extra"));
                for slot in items.iter_mut() {
                    if let Slot::Node(Node::Array(inner)) = slot {
                        inner.push(Slot::Null);
                    }
                }
            }
            Node::Object(map) => {
                map.insert("__extra-key__".to_string(), Slot::from(true));
            }
            Node::Empty => unreachable!("parsed documents are never empty"),
        }

        prop_assert_ne!(&copy, &original);
        prop_assert_eq!(serde_json::to_value(&original).unwrap(), doc);
    }

    #[test]
    fn take_moves_everything(doc in arb_document()) {
        let text = serde_json::to_string(&doc).unwrap();
        let mut source = Node::parse(&text).unwrap();
        let moved = source.take();
        prop_assert!(source.is_empty());
        prop_assert_eq!(source.size(), 0);
        prop_assert_eq!(serde_json::to_value(&moved).unwrap(), doc);
    }
}
