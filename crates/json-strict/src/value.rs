//! [`JsonValue`] — the recursive tagged value tree, plus its accessor layer.

/// A parsed JSON value.
///
/// Strings and object keys are owned byte sequences rather than `String`:
/// their length is explicit, embedded NUL bytes are legal, and a lone low
/// surrogate escape decodes to bytes that are not valid UTF-8 but are still
/// preserved verbatim.
///
/// Ownership is strict: every child value is owned by its parent container,
/// so dropping a value (or re-tagging it through a setter) recursively
/// releases the whole subtree.
#[derive(Debug, Clone)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(Vec<u8>),
    Array(Vec<JsonValue>),
    /// Insertion-ordered member list. Duplicate keys are legal and kept;
    /// lookups return the first match.
    Object(Vec<Member>),
}

/// One key/value pair inside an object's ordered member list.
#[derive(Debug, Clone)]
pub struct Member {
    pub key: Vec<u8>,
    pub value: JsonValue,
}

/// Discriminant of a [`JsonValue`], with `false` and `true` kept distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

impl Default for JsonValue {
    fn default() -> Self {
        JsonValue::Null
    }
}

impl JsonValue {
    /// Current tag of this value.
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Bool(false) => JsonKind::False,
            JsonValue::Bool(true) => JsonKind::True,
            JsonValue::Number(_) => JsonKind::Number,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Object(_) => JsonKind::Object,
        }
    }

    /// Resets this value to `Null`, releasing any owned payload.
    ///
    /// Safe to call on a value that is already `Null`.
    pub fn set_null(&mut self) {
        *self = JsonValue::Null;
    }

    pub fn get_boolean(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = JsonValue::Bool(b);
    }

    pub fn get_number(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn set_number(&mut self, n: f64) {
        *self = JsonValue::Number(n);
    }

    /// String payload, if this value is a string.
    pub fn get_string(&self) -> Option<&[u8]> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Byte length of the string payload. Independent of any embedded NUL.
    pub fn string_len(&self) -> Option<usize> {
        self.get_string().map(<[u8]>::len)
    }

    /// Replaces this value with a string, copying the provided bytes.
    pub fn set_string(&mut self, bytes: &[u8]) {
        *self = JsonValue::String(bytes.to_vec());
    }

    pub fn array_len(&self) -> Option<usize> {
        match self {
            JsonValue::Array(elements) => Some(elements.len()),
            _ => None,
        }
    }

    pub fn array_element(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    pub fn object_len(&self) -> Option<usize> {
        match self {
            JsonValue::Object(members) => Some(members.len()),
            _ => None,
        }
    }

    pub fn object_key(&self, index: usize) -> Option<&[u8]> {
        match self {
            JsonValue::Object(members) => members.get(index).map(|m| m.key.as_slice()),
            _ => None,
        }
    }

    pub fn object_key_len(&self, index: usize) -> Option<usize> {
        self.object_key(index).map(<[u8]>::len)
    }

    pub fn object_value(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(members) => members.get(index).map(|m| &m.value),
            _ => None,
        }
    }

    /// Index of the first member with exactly `key` as its key bytes.
    ///
    /// Linear scan over the ordered member list. Comparison is by explicit
    /// length and content, never terminator-delimited.
    pub fn find_object_index(&self, key: &[u8]) -> Option<usize> {
        match self {
            JsonValue::Object(members) => members.iter().position(|m| m.key == key),
            _ => None,
        }
    }

    /// Value of the first member whose key is exactly `key`.
    pub fn find_object_value(&self, key: &[u8]) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(members) => {
                members.iter().find(|m| m.key == key).map(|m| &m.value)
            }
            _ => None,
        }
    }
}

/// Deep structural equality.
///
/// Numbers compare by exact IEEE-754 value equality, no epsilon: canonical
/// serialization round-trips exactly, so tolerance would only mask bugs.
/// Objects compare member-by-member at the same index, which makes equality
/// order-sensitive; two objects with the same members in a different order
/// are unequal. This is a deliberate simplification, not a set comparison.
impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
            (JsonValue::Number(a), JsonValue::Number(b)) => a == b,
            (JsonValue::String(a), JsonValue::String(b)) => a == b,
            (JsonValue::Array(a), JsonValue::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
            }
            (JsonValue::Object(a), JsonValue::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|(m, n)| m.key == n.key && m.value == n.value)
            }
            _ => false,
        }
    }
}
