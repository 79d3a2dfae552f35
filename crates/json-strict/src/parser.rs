//! Recursive-descent JSON parser.
//!
//! Strict grammar only: no comments, no trailing commas, exactly one root
//! value. String bytes are accumulated in a [`ScratchBuf`] with a mark taken
//! on entry, and every string error path rolls the buffer back to that mark.
//! Partially built arrays and objects live in local vectors, so dropping
//! them on the error path releases every already-parsed child; a failed
//! parse never leaks a partial tree to the caller.

use json_strict_buffers::ScratchBuf;

use crate::error::ParseError;
use crate::number;
use crate::value::{JsonValue, Member};

/// Parses a complete JSON text into a [`JsonValue`] tree.
///
/// Leading and trailing whitespace (space, tab, CR, LF) is permitted;
/// anything else after the root value is [`ParseError::RootNotSingular`].
///
/// # Example
///
/// ```
/// use json_strict::{parse, JsonValue};
///
/// let v = parse(b"[1, 2, 3]").unwrap();
/// assert_eq!(v.array_len(), Some(3));
/// assert!(parse(b"[1, 2,").is_err());
/// ```
pub fn parse(text: &[u8]) -> Result<JsonValue, ParseError> {
    let mut parser = JsonParser::new(text);
    let result = parser.parse_document();
    // A non-empty scratch after any parse attempt is a rollback bug.
    debug_assert!(parser.scratch.is_empty());
    result
}

/// Parser state: a cursor over the input plus the string scratch buffer.
pub struct JsonParser<'a> {
    data: &'a [u8],
    x: usize,
    scratch: ScratchBuf,
}

impl<'a> JsonParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            x: 0,
            scratch: ScratchBuf::new(),
        }
    }

    /// Parses one complete document: optional whitespace, a single value,
    /// optional whitespace, end of input.
    pub fn parse_document(&mut self) -> Result<JsonValue, ParseError> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.data.get(self.x).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.x += 1;
        }
    }

    fn parse_value(&mut self) -> Result<JsonValue, ParseError> {
        match self.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => self.parse_literal(b"null", JsonValue::Null),
            Some(b't') => self.parse_literal(b"true", JsonValue::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", JsonValue::Bool(false)),
            Some(b'"') => self.parse_string_raw().map(JsonValue::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
        }
    }

    fn parse_literal(&mut self, literal: &[u8], value: JsonValue) -> Result<JsonValue, ParseError> {
        let end = self.x + literal.len();
        if end > self.data.len() || &self.data[self.x..end] != literal {
            return Err(ParseError::InvalidValue);
        }
        self.x = end;
        Ok(value)
    }

    fn parse_number(&mut self) -> Result<JsonValue, ParseError> {
        let end = number::scan(self.data, self.x)?;
        let lexeme =
            std::str::from_utf8(&self.data[self.x..end]).map_err(|_| ParseError::InvalidValue)?;
        let n: f64 = lexeme.parse().map_err(|_| ParseError::InvalidValue)?;
        if n.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        self.x = end;
        Ok(JsonValue::Number(n))
    }

    /// Rolls the scratch back to `head` and hands the error through.
    fn string_error(&mut self, head: usize, err: ParseError) -> ParseError {
        self.scratch.rollback_to(head);
        err
    }

    /// Parses one quoted string (cursor on the opening quote) and returns
    /// the decoded bytes, harvested from the scratch buffer.
    fn parse_string_raw(&mut self) -> Result<Vec<u8>, ParseError> {
        let head = self.scratch.mark();
        self.x += 1; // opening quote, checked by the dispatcher
        loop {
            let ch = match self.peek() {
                // A raw NUL is treated as a terminator, same as running out
                // of input: the string was never closed.
                None | Some(b'\0') => {
                    return Err(self.string_error(head, ParseError::MissQuotationMark))
                }
                Some(ch) => ch,
            };
            self.x += 1;
            match ch {
                b'"' => return Ok(self.scratch.take_from(head)),
                b'\\' => match self.next_escape() {
                    Ok(()) => {}
                    Err(err) => return Err(self.string_error(head, err)),
                },
                _ if ch < 0x20 => {
                    return Err(self.string_error(head, ParseError::InvalidStringChar))
                }
                _ => self.scratch.push_byte(ch),
            }
        }
    }

    /// Decodes one escape sequence (cursor just past the backslash) into
    /// the scratch buffer. The caller owns the rollback on error.
    fn next_escape(&mut self) -> Result<(), ParseError> {
        let ch = self.peek().ok_or(ParseError::InvalidStringEscape)?;
        self.x += 1;
        let literal = match ch {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => {
                let mut u = self.parse_hex4()?;
                if (0xD800..=0xDBFF).contains(&u) {
                    // High surrogate: a paired `\uXXXX` low surrogate is
                    // mandatory.
                    if self.peek() != Some(b'\\') {
                        return Err(ParseError::InvalidUnicodeSurrogate);
                    }
                    self.x += 1;
                    if self.peek() != Some(b'u') {
                        return Err(ParseError::InvalidUnicodeSurrogate);
                    }
                    self.x += 1;
                    let u2 = self.parse_hex4()?;
                    if !(0xDC00..=0xDFFF).contains(&u2) {
                        return Err(ParseError::InvalidUnicodeSurrogate);
                    }
                    u = 0x10000 + ((u - 0xD800) << 10) + (u2 - 0xDC00);
                }
                self.push_utf8(u);
                return Ok(());
            }
            _ => return Err(ParseError::InvalidStringEscape),
        };
        self.scratch.push_byte(literal);
        Ok(())
    }

    /// Reads exactly four hex digits as a code unit.
    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let mut u = 0u32;
        for _ in 0..4 {
            let ch = self.peek().ok_or(ParseError::InvalidUnicodeHex)?;
            self.x += 1;
            u <<= 4;
            u += match ch {
                b'0'..=b'9' => u32::from(ch - b'0'),
                b'a'..=b'f' => u32::from(ch - b'a' + 10),
                b'A'..=b'F' => u32::from(ch - b'A' + 10),
                _ => return Err(ParseError::InvalidUnicodeHex),
            };
        }
        Ok(u)
    }

    /// Appends the UTF-8 form of `u` to the scratch buffer.
    ///
    /// Code points in the surrogate range are encoded by the same 3-byte
    /// rule as any other value below 0x10000; a lone low surrogate is
    /// deliberately passed through rather than rejected.
    fn push_utf8(&mut self, u: u32) {
        debug_assert!(u <= 0x10FFFF);
        if u <= 0x7F {
            self.scratch.push_byte(u as u8);
        } else if u <= 0x7FF {
            self.scratch.push_byte(((u >> 6) & 0x1F) as u8 | 0xC0);
            self.scratch.push_byte((u & 0x3F) as u8 | 0x80);
        } else if u <= 0xFFFF {
            self.scratch.push_byte(((u >> 12) & 0x0F) as u8 | 0xE0);
            self.scratch.push_byte(((u >> 6) & 0x3F) as u8 | 0x80);
            self.scratch.push_byte((u & 0x3F) as u8 | 0x80);
        } else {
            self.scratch.push_byte(((u >> 18) & 0x07) as u8 | 0xF0);
            self.scratch.push_byte(((u >> 12) & 0x3F) as u8 | 0x80);
            self.scratch.push_byte(((u >> 6) & 0x3F) as u8 | 0x80);
            self.scratch.push_byte((u & 0x3F) as u8 | 0x80);
        }
    }

    fn parse_array(&mut self) -> Result<JsonValue, ParseError> {
        self.x += 1; // '['
        self.skip_whitespace();
        match self.peek() {
            Some(b']') => {
                self.x += 1;
                return Ok(JsonValue::Array(Vec::new()));
            }
            Some(b',') => return Err(ParseError::ExpectValue),
            _ => {}
        }
        let mut elements = Vec::new();
        loop {
            self.skip_whitespace();
            // On error, `elements` drops here and frees everything parsed
            // so far for this array.
            elements.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b']') => {
                    self.x += 1;
                    return Ok(JsonValue::Array(elements));
                }
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self) -> Result<JsonValue, ParseError> {
        self.x += 1; // '{'
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.x += 1;
            return Ok(JsonValue::Object(Vec::new()));
        }
        let mut members = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(ParseError::MissKey);
            }
            let key = self.parse_string_raw()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(ParseError::MissColon);
            }
            self.x += 1;
            self.skip_whitespace();
            let value = self.parse_value()?;
            members.push(Member { key, value });
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b'}') => {
                    self.x += 1;
                    return Ok(JsonValue::Object(members));
                }
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }
}
