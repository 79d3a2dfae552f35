//! Parse acceptance and rejection matrices for the full grammar.

use json_strict::{parse, JsonKind, JsonValue, ParseError};

fn check_error(text: &str, expected: ParseError) {
    assert_eq!(parse(text.as_bytes()), Err(expected), "{text:?}");
}

fn check_number(expected: f64, text: &str) {
    let v = parse(text.as_bytes()).expect(text);
    assert_eq!(v.get_number(), Some(expected), "{text:?}");
}

fn check_string(expected: &[u8], text: &str) {
    let v = parse(text.as_bytes()).expect(text);
    assert_eq!(v.get_string(), Some(expected), "{text:?}");
    assert_eq!(v.string_len(), Some(expected.len()), "{text:?}");
}

#[test]
fn parse_literal_matrix() {
    assert_eq!(parse(b"null").unwrap(), JsonValue::Null);
    assert_eq!(parse(b"true").unwrap(), JsonValue::Bool(true));
    assert_eq!(parse(b"false").unwrap(), JsonValue::Bool(false));
    assert_eq!(parse(b"  true \t\r\n").unwrap(), JsonValue::Bool(true));

    check_error("nul", ParseError::InvalidValue);
    check_error("fallse", ParseError::InvalidValue);
    check_error("tru", ParseError::InvalidValue);
}

#[test]
fn parse_expect_value_matrix() {
    check_error("", ParseError::ExpectValue);
    check_error(" ", ParseError::ExpectValue);
    check_error(" \t\n\r ", ParseError::ExpectValue);
}

#[test]
fn parse_root_not_singular_matrix() {
    check_error("null x", ParseError::RootNotSingular);
    check_error("0123", ParseError::RootNotSingular);
    check_error("0x0", ParseError::RootNotSingular);
    check_error("1.5 }", ParseError::RootNotSingular);
    check_error("\"a\" \"b\"", ParseError::RootNotSingular);
}

#[test]
fn parse_number_matrix() {
    check_number(0.0, "0");
    check_number(0.0, "-0");
    check_number(0.0, "-0.0");
    check_number(1.0, "1");
    check_number(-1.0, "-1");
    check_number(1.5, "1.5");
    check_number(-1.5, "-1.5");
    check_number(3.1416, "3.1416");
    check_number(1e10, "1E10");
    check_number(1e10, "1e10");
    check_number(1e10, "1E+10");
    check_number(1e-10, "1E-10");
    check_number(-1e10, "-1E10");
    check_number(-1e10, "-1e10");
    check_number(-1e10, "-1E+10");
    check_number(-1e-10, "-1E-10");
    check_number(1.234e10, "1.234E+10");
    check_number(1.234e-10, "1.234E-10");
    check_number(12.2e2, "12.2e002");
    check_number(12.2, "12.2e00000");
    // must underflow to zero, not error
    check_number(0.0, "1e-10000");
    // the smallest number greater than one
    check_number(1.000_000_000_000_000_2, "1.0000000000000002");
    // minimum denormal
    check_number(4.9406564584124654e-324, "4.9406564584124654e-324");
    check_number(-4.9406564584124654e-324, "-4.9406564584124654e-324");
    // max subnormal
    check_number(2.2250738585072009e-308, "2.2250738585072009e-308");
    check_number(-2.2250738585072009e-308, "-2.2250738585072009e-308");
    // min normal positive
    check_number(2.2250738585072014e-308, "2.2250738585072014e-308");
    check_number(-2.2250738585072014e-308, "-2.2250738585072014e-308");
    // max double
    check_number(1.7976931348623157e+308, "1.7976931348623157e+308");
    check_number(-1.7976931348623157e+308, "-1.7976931348623157e+308");
}

#[test]
fn parse_invalid_number_matrix() {
    check_error("+0", ParseError::InvalidValue);
    check_error("+1", ParseError::InvalidValue);
    check_error(".123", ParseError::InvalidValue);
    check_error("1.", ParseError::InvalidValue);
    check_error("INF", ParseError::InvalidValue);
    check_error("inf", ParseError::InvalidValue);
    check_error("NAN", ParseError::InvalidValue);
    check_error("nan", ParseError::InvalidValue);
    check_error("?", ParseError::InvalidValue);
}

#[test]
fn parse_number_too_big_matrix() {
    check_error("1e10000", ParseError::NumberTooBig);
    check_error("-1e10000", ParseError::NumberTooBig);
    check_error("1e309", ParseError::NumberTooBig);
}

#[test]
fn parse_string_matrix() {
    check_string(b"", "\"\"");
    check_string(b"Hello", "\"Hello\"");
    check_string(b"Hello\nWorld", "\"Hello\\nWorld\"");
    check_string(b"\" \\ / \x08 \x0C \n \r \t", "\"\\\" \\\\ \\/ \\b \\f \\n \\r \\t\"");
    check_string(b"Hello\0World", "\"Hello\\u0000World\"");
    check_string(b"a\0b", "\"a\\u0000b\"");
    check_string(b"\x24", "\"\\u0024\""); // dollar U+0024
    check_string(b"\xC2\xA2", "\"\\u00A2\""); // cents U+00A2
    check_string(b"\xE2\x82\xAC", "\"\\u20AC\""); // euro U+20AC
    check_string(b"\xF0\x9D\x84\x9E", "\"\\uD834\\uDD1E\""); // G clef U+1D11E
    check_string(b"\xF0\x9D\x84\x9E", "\"\\ud834\\udd1e\"");
    // a lone low surrogate is not range-checked; it passes through as its
    // raw three-byte encoding
    check_string(b"\xED\xB0\x80", "\"\\uDC00\"");
}

#[test]
fn parse_invalid_string_escape_matrix() {
    check_error("\"\\v\"", ParseError::InvalidStringEscape);
    check_error("\"\\'\"", ParseError::InvalidStringEscape);
    check_error("\"\\0\"", ParseError::InvalidStringEscape);
    check_error("\"\\x12\"", ParseError::InvalidStringEscape);
}

#[test]
fn parse_invalid_string_char_matrix() {
    check_error("\"\x01\"", ParseError::InvalidStringChar);
    check_error("\"\x1F\"", ParseError::InvalidStringChar);
}

#[test]
fn parse_miss_quotation_mark_matrix() {
    check_error("\"", ParseError::MissQuotationMark);
    check_error("\"abc", ParseError::MissQuotationMark);
    check_error("\"abc\0def\"", ParseError::MissQuotationMark);
}

#[test]
fn parse_invalid_unicode_hex_matrix() {
    for text in [
        "\"\\u\"", "\"\\u0\"", "\"\\u01\"", "\"\\u012\"", "\"\\u/000\"", "\"\\uG000\"",
        "\"\\u0/00\"", "\"\\u0G00\"", "\"\\u00/0\"", "\"\\u00G0\"", "\"\\u000/\"",
        "\"\\u000G\"", "\"\\u000\x1FG\"",
    ] {
        check_error(text, ParseError::InvalidUnicodeHex);
    }
}

#[test]
fn parse_invalid_unicode_surrogate_matrix() {
    check_error("\"\\uD800\"", ParseError::InvalidUnicodeSurrogate);
    check_error("\"\\uDBFF\"", ParseError::InvalidUnicodeSurrogate);
    check_error("\"\\uD800\\\\\"", ParseError::InvalidUnicodeSurrogate);
    check_error("\"\\uD800\\uDBFF\"", ParseError::InvalidUnicodeSurrogate);
    check_error("\"\\uD800\\uE000\"", ParseError::InvalidUnicodeSurrogate);
}

#[test]
fn parse_array_matrix() {
    let v = parse(b"[ ]").unwrap();
    assert_eq!(v.kind(), JsonKind::Array);
    assert_eq!(v.array_len(), Some(0));

    let v = parse(b"[ \"abc\" , 123, true,  false ]").unwrap();
    assert_eq!(v.array_len(), Some(4));

    let v = parse(b"[ null , false , true , 123 , \"abc\" ]").unwrap();
    assert_eq!(v.array_len(), Some(5));
    assert_eq!(v.array_element(0).unwrap().kind(), JsonKind::Null);
    assert_eq!(v.array_element(1).unwrap().kind(), JsonKind::False);
    assert_eq!(v.array_element(2).unwrap().kind(), JsonKind::True);
    assert_eq!(v.array_element(3).unwrap().get_number(), Some(123.0));
    assert_eq!(v.array_element(4).unwrap().get_string(), Some(&b"abc"[..]));

    let v = parse(b"[ [ ] , [ 0 ] , [ 0 , 1 ] , [ 0 , 1 , 2 ] ]").unwrap();
    assert_eq!(v.array_len(), Some(4));
    for i in 0..4 {
        let a = v.array_element(i).unwrap();
        assert_eq!(a.array_len(), Some(i));
        for j in 0..i {
            let e = a.array_element(j).unwrap();
            assert_eq!(e.get_number(), Some(j as f64));
        }
    }
}

#[test]
fn parse_array_error_matrix() {
    check_error("[,]", ParseError::ExpectValue);
    check_error("[1,2,", ParseError::ExpectValue);
    check_error("[1,2", ParseError::MissCommaOrSquareBracket);
    check_error("[1 2]", ParseError::MissCommaOrSquareBracket);
    check_error("[\"a\", [1, 2", ParseError::MissCommaOrSquareBracket);
    check_error("[\"a\", nul]", ParseError::InvalidValue);
    check_error("[\"unclosed]", ParseError::MissQuotationMark);
}

#[test]
fn parse_object_matrix() {
    let v = parse(b" { } ").unwrap();
    assert_eq!(v.kind(), JsonKind::Object);
    assert_eq!(v.object_len(), Some(0));

    let v = parse(b" {\"1\":1} ").unwrap();
    assert_eq!(v.object_len(), Some(1));
    assert_eq!(v.object_key(0), Some(&b"1"[..]));
    assert_eq!(v.object_key_len(0), Some(1));
    assert_eq!(v.object_value(0).unwrap().get_number(), Some(1.0));

    let v = parse(
        br#"    {
        "n" : null ,
        "f" : false ,
        "t" : true ,
        "i" : 1234 ,
        "s" : "abcd1234" ,
        "a" : [ 0, 1, 2, 3, 4 , 5] ,
        "ooo" : {"0":0,   "1" : 1 , "2" : 2, "3" : 3  }     ,
        "test\u0000test": {"0":0}
        } "#,
    )
    .unwrap();
    assert_eq!(v.object_len(), Some(8));
    assert_eq!(v.object_key(0), Some(&b"n"[..]));
    assert_eq!(v.object_value(0).unwrap().kind(), JsonKind::Null);
    assert_eq!(v.object_key(1), Some(&b"f"[..]));
    assert_eq!(v.object_value(1).unwrap().kind(), JsonKind::False);
    assert_eq!(v.object_key(2), Some(&b"t"[..]));
    assert_eq!(v.object_value(2).unwrap().kind(), JsonKind::True);
    assert_eq!(v.object_key(3), Some(&b"i"[..]));
    assert_eq!(v.object_value(3).unwrap().get_number(), Some(1234.0));
    assert_eq!(v.object_key(4), Some(&b"s"[..]));
    assert_eq!(
        v.object_value(4).unwrap().get_string(),
        Some(&b"abcd1234"[..])
    );
    let a = v.object_value(5).unwrap();
    assert_eq!(a.array_len(), Some(6));
    for i in 0..6 {
        assert_eq!(a.array_element(i).unwrap().get_number(), Some(i as f64));
    }
    let ooo = v.object_value(6).unwrap();
    assert_eq!(ooo.object_len(), Some(4));
    for i in 0..4 {
        assert_eq!(ooo.object_key(i), Some(&[b'0' + i as u8][..]));
        assert_eq!(ooo.object_value(i).unwrap().get_number(), Some(i as f64));
    }

    // linear lookup, including an embedded NUL in the key
    assert_eq!(
        v.find_object_value(b"n").map(JsonValue::kind),
        Some(JsonKind::Null)
    );
    assert_eq!(v.find_object_value(b"ff"), None);
    assert_eq!(v.find_object_index(b"test\0test"), Some(7));
    assert_eq!(
        v.find_object_value(b"test\0test").map(JsonValue::kind),
        Some(JsonKind::Object)
    );
}

#[test]
fn parse_object_error_matrix() {
    check_error("{1:1}", ParseError::MissKey);
    check_error("{true:1}", ParseError::MissKey);
    check_error("{:1}", ParseError::MissKey);
    check_error("{,}", ParseError::MissKey);
    check_error("{\"a\":1,}", ParseError::MissKey);
    check_error("{\"a\"}", ParseError::MissColon);
    check_error("{\"a\",\"b\"}", ParseError::MissColon);
    check_error("{\"a\":1", ParseError::MissCommaOrCurlyBracket);
    check_error("{\"a\":1]", ParseError::MissCommaOrCurlyBracket);
    check_error("{\"a\":1 \"b\":2}", ParseError::MissCommaOrCurlyBracket);
    check_error("{\"a\":nul}", ParseError::InvalidValue);
    check_error("{\"a\":{\"b\":1,}}", ParseError::MissKey);
}

#[test]
fn parse_failure_leaves_no_partial_tree() {
    // Errors deep inside composites propagate and every already-built
    // element is released on the way out; the parser stays usable.
    for text in [
        "[1,2,",
        "[[[0,1],[2]],",
        "{\"a\":[1,{\"b\":2},",
        "[\"ok\",\"bad\\uD800\"]",
    ] {
        assert!(parse(text.as_bytes()).is_err(), "{text:?}");
    }
    assert_eq!(parse(b"[0]").unwrap().array_len(), Some(1));
}
