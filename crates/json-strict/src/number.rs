//! Finite-state recognizer for the strict JSON number grammar.
//!
//! Grammar: optional `-`; integer part `0` or a nonzero digit followed by
//! digits (no other leading zeros); optional `.` followed by at least one
//! digit; optional `e`/`E` with optional sign followed by at least one digit.

use crate::error::ParseError;

#[derive(Debug, Clone, Copy)]
enum State {
    /// Before anything; sign or first integer digit expected.
    Start,
    /// After the leading `-`; first integer digit expected.
    Minus,
    /// Integer part is a lone `0`; only `.`, `e`/`E`, or the end may follow.
    Zero,
    /// Inside a nonzero-led integer digit run.
    Int,
    /// After the fraction dot; a digit is mandatory.
    Dot,
    /// Inside the fraction digit run.
    Frac,
    /// After `e`/`E`; sign or digit is mandatory.
    Exp,
    /// After the exponent sign; a digit is mandatory.
    ExpSign,
    /// Inside the exponent digit run.
    ExpDigits,
}

/// Scans one number lexeme starting at `start`.
///
/// Returns the end offset of the lexeme (exclusive, not including whatever
/// trailing non-number character stopped the scan). Rejection anywhere in
/// the grammar is [`ParseError::InvalidValue`].
pub(crate) fn scan(data: &[u8], start: usize) -> Result<usize, ParseError> {
    let mut x = start;
    let mut state = State::Start;
    loop {
        let ch = data.get(x).copied();
        state = match state {
            State::Start => match ch {
                Some(b'-') => State::Minus,
                Some(b'0') => State::Zero,
                Some(b'1'..=b'9') => State::Int,
                _ => return Err(ParseError::InvalidValue),
            },
            State::Minus => match ch {
                Some(b'0') => State::Zero,
                Some(b'1'..=b'9') => State::Int,
                _ => return Err(ParseError::InvalidValue),
            },
            State::Zero => match ch {
                Some(b'.') => State::Dot,
                Some(b'e' | b'E') => State::Exp,
                _ => return Ok(x),
            },
            State::Int => match ch {
                Some(b'0'..=b'9') => State::Int,
                Some(b'.') => State::Dot,
                Some(b'e' | b'E') => State::Exp,
                _ => return Ok(x),
            },
            State::Dot => match ch {
                Some(b'0'..=b'9') => State::Frac,
                _ => return Err(ParseError::InvalidValue),
            },
            State::Frac => match ch {
                Some(b'0'..=b'9') => State::Frac,
                Some(b'e' | b'E') => State::Exp,
                _ => return Ok(x),
            },
            State::Exp => match ch {
                Some(b'+' | b'-') => State::ExpSign,
                Some(b'0'..=b'9') => State::ExpDigits,
                _ => return Err(ParseError::InvalidValue),
            },
            State::ExpSign => match ch {
                Some(b'0'..=b'9') => State::ExpDigits,
                _ => return Err(ParseError::InvalidValue),
            },
            State::ExpDigits => match ch {
                Some(b'0'..=b'9') => State::ExpDigits,
                _ => return Ok(x),
            },
        };
        x += 1;
    }
}
