//! Strict JSON text codec.
//!
//! Parses a byte sequence into a [`JsonValue`] tree and serializes a tree
//! back into canonical JSON text. Strict grammar only: no comments, no
//! trailing commas, no partial input. Numbers are IEEE-754 doubles and
//! round-trip textually; object member order is preserved and duplicate
//! keys are kept.
//!
//! # Example
//!
//! ```
//! use json_strict::{parse, stringify};
//!
//! let v = parse(b"{\"a\": [1, 2.5, null], \"b\": \"x\"}").unwrap();
//! assert_eq!(stringify(&v), b"{\"a\":[1,2.5,null],\"b\":\"x\"}");
//! assert_eq!(v.find_object_value(b"b").and_then(|b| b.get_string()), Some(&b"x"[..]));
//! ```

mod encoder;
mod error;
mod number;
mod parser;
mod value;

pub use encoder::{stringify, JsonEncoder};
pub use error::ParseError;
pub use parser::{parse, JsonParser};
pub use value::{JsonKind, JsonValue, Member};
