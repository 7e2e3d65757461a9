//! `serde::Serialize` for the value model.
//!
//! Objects become maps, arrays sequences, and both `Node::Empty` and
//! `Slot::Null` become unit (`null` in JSON). Finite integral numbers that fit
//! in an `i64` are written as integers so `1` does not come out as `1.0`.

use serde::ser::{Serialize, Serializer};

use crate::node::{Node, Slot};

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Empty => serializer.serialize_unit(),
            Node::Object(map) => serializer.collect_map(map),
            Node::Array(items) => serializer.collect_seq(items),
        }
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Null => serializer.serialize_unit(),
            Slot::Bool(b) => serializer.serialize_bool(*b),
            Slot::Number(n) => match as_integer(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Slot::String(s) => serializer.serialize_str(s),
            Slot::Node(node) => node.serialize(serializer),
        }
    }
}

// 2^63 as f64; anything at or beyond it does not fit in i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn as_integer(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&n) {
        Some(n as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::as_integer;

    #[test]
    fn integral_numbers_become_integers() {
        assert_eq!(as_integer(3.0), Some(3));
        assert_eq!(as_integer(-0.0), Some(0));
        assert_eq!(as_integer(-42.0), Some(-42));
    }

    #[test]
    fn fractional_and_huge_numbers_stay_floats() {
        assert_eq!(as_integer(1.5), None);
        assert_eq!(as_integer(1e300), None);
        assert_eq!(as_integer(f64::NAN), None);
    }
}
