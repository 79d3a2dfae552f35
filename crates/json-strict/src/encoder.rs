//! JSON serializer: recursive emission of a [`JsonValue`] tree into text.

use json_strict_buffers::ScratchBuf;

use crate::value::JsonValue;

/// Serializes a value tree into JSON text.
///
/// Infallible: the closed [`JsonValue`] enum leaves no invalid tag to
/// report. The returned bytes are valid JSON whenever every string payload
/// in the tree is (strings are emitted verbatim, so non-UTF-8 payload bytes
/// pass through unchanged).
///
/// # Example
///
/// ```
/// use json_strict::{parse, stringify};
///
/// let v = parse(b"[null, 1.5, \"a\"]").unwrap();
/// assert_eq!(stringify(&v), b"[null,1.5,\"a\"]");
/// ```
pub fn stringify(value: &JsonValue) -> Vec<u8> {
    let mut encoder = JsonEncoder::new();
    encoder.encode(value)
}

/// Reusable serializer owning its output accumulator.
pub struct JsonEncoder {
    out: ScratchBuf,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {
            out: ScratchBuf::new(),
        }
    }

    /// Emits `value` and returns the produced text, leaving the encoder
    /// ready for the next call.
    pub fn encode(&mut self, value: &JsonValue) -> Vec<u8> {
        self.out.clear();
        self.write_value(value);
        self.out.take_from(0)
    }

    fn write_value(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Null => self.out.push_slice(b"null"),
            JsonValue::Bool(false) => self.out.push_slice(b"false"),
            JsonValue::Bool(true) => self.out.push_slice(b"true"),
            JsonValue::Number(n) => self.out.push_slice(format_number(*n).as_bytes()),
            JsonValue::String(s) => self.write_string(s),
            JsonValue::Array(elements) => {
                self.out.push_byte(b'[');
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.out.push_byte(b',');
                    }
                    self.write_value(element);
                }
                self.out.push_byte(b']');
            }
            JsonValue::Object(members) => {
                self.out.push_byte(b'{');
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        self.out.push_byte(b',');
                    }
                    self.write_string(&member.key);
                    self.out.push_byte(b':');
                    self.write_value(&member.value);
                }
                self.out.push_byte(b'}');
            }
        }
    }

    /// Quote-delimited string emission with escaping.
    ///
    /// `/` is accepted escaped on input but never escaped on output; this
    /// asymmetry is long-standing tested behavior, not an oversight.
    fn write_string(&mut self, bytes: &[u8]) {
        self.out.push_byte(b'"');
        for &b in bytes {
            match b {
                b'"' => self.out.push_slice(b"\\\""),
                b'\\' => self.out.push_slice(b"\\\\"),
                0x08 => self.out.push_slice(b"\\b"),
                0x0C => self.out.push_slice(b"\\f"),
                b'\n' => self.out.push_slice(b"\\n"),
                b'\r' => self.out.push_slice(b"\\r"),
                b'\t' => self.out.push_slice(b"\\t"),
                _ if b < 0x20 => {
                    const HEX: &[u8; 16] = b"0123456789ABCDEF";
                    self.out.push_slice(&[
                        b'\\',
                        b'u',
                        b'0',
                        b'0',
                        HEX[usize::from(b >> 4)],
                        HEX[usize::from(b & 0x0F)],
                    ]);
                }
                _ => self.out.push_byte(b),
            }
        }
        self.out.push_byte(b'"');
    }
}

/// Formats a double with 17 significant digits, trailing zeros trimmed.
///
/// Fixed notation for decimal exponents in [-4, 17), otherwise scientific
/// with an explicit sign and at least two exponent digits. Every finite
/// double re-parses to exactly the same value.
fn format_number(n: f64) -> String {
    // The grammar cannot produce non-finite numbers; a setter can. Emit the
    // nearest valid JSON instead of invalid tokens.
    if n.is_nan() {
        return "null".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "1e308" } else { "-1e308" }.to_string();
    }
    let scientific = format!("{n:.16e}");
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    // Significant digits with the decimal point and trailing zeros removed.
    let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    if !(-4..17).contains(&exp) {
        let mantissa = if digits.len() == 1 {
            digits
        } else {
            format!("{}.{}", &digits[..1], &digits[1..])
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exp_sign}{:02}", exp.abs())
    } else if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        format!("{sign}0.{zeros}{digits}")
    } else {
        let point = exp as usize + 1;
        if digits.len() > point {
            format!("{sign}{}.{}", &digits[..point], &digits[point..])
        } else {
            let zeros = "0".repeat(point - digits.len());
            format!("{sign}{digits}{zeros}")
        }
    }
}
