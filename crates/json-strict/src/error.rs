//! Parse error taxonomy.

use thiserror::Error;

/// Everything that can go wrong while parsing JSON text.
///
/// Errors are detected synchronously in a single pass; the parser never
/// retries. Whatever a failing sub-parser built provisionally is released
/// before the error propagates, so a caller holding a `ParseError` holds
/// no partial tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Empty or whitespace-only input where a value is required.
    #[error("expected a value")]
    ExpectValue,
    /// Unrecognized literal, malformed number, or a bare leading comma.
    #[error("invalid value")]
    InvalidValue,
    /// Trailing non-whitespace after the single root value.
    #[error("root is not singular")]
    RootNotSingular,
    /// Number magnitude overflows to infinity.
    #[error("number out of double range")]
    NumberTooBig,
    /// String never closed (end of input, or a raw NUL byte).
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// Backslash followed by an unrecognized escape character.
    #[error("invalid string escape")]
    InvalidStringEscape,
    /// Unescaped control byte (< 0x20) inside a string.
    #[error("invalid character in string")]
    InvalidStringChar,
    /// Malformed or short `\u` hex digits.
    #[error("invalid unicode hex escape")]
    InvalidUnicodeHex,
    /// High surrogate without a valid paired low surrogate.
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,
    /// Array element not followed by `,` or `]`.
    #[error("missing comma or ']'")]
    MissCommaOrSquareBracket,
    /// Object member not followed by `,` or `}`.
    #[error("missing comma or '}}'")]
    MissCommaOrCurlyBracket,
    /// Object key not followed by `:`.
    #[error("missing ':' after object key")]
    MissColon,
    /// Object member does not start with a quoted key.
    #[error("missing object key")]
    MissKey,
}
