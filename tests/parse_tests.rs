//! End-to-end parsing and lookup tests.
//!
//! Covers path lookup tables, structural round trips, rendering properties,
//! malformed-input rejection, and a differential check against `serde_json`
//! on valid documents.

use std::collections::BTreeMap;

use jsonpick::{get_value, parse, render, Error, Value};

const SAMPLE: &str = r#"{"A":"a", "B": {"C":1, "D":2}, "E":9}"#;

// ============================================================================
// Path lookup
// ============================================================================

#[test]
fn get_value_top_level_key() {
    let result = get_value(SAMPLE, &["A"]).unwrap();
    assert_eq!(result, Value::String("a".to_string()));
}

#[test]
fn get_value_nested_key() {
    assert_eq!(get_value(SAMPLE, &["B", "D"]).unwrap(), Value::Number(2.0));
    assert_eq!(get_value(SAMPLE, &["B", "C"]).unwrap(), Value::Number(1.0));
}

#[test]
fn get_value_through_non_object() {
    // "A" resolves to the string "a"; descending further is a lookup error.
    let err = get_value(SAMPLE, &["A", "B", "E"]).unwrap_err();
    assert_eq!(err, Error::NotAnObject("A".to_string()));

    let err = get_value(SAMPLE, &["A", "B", "c"]).unwrap_err();
    assert!(err.is_lookup());
}

#[test]
fn get_value_missing_key() {
    let err = get_value(SAMPLE, &["B", "X"]).unwrap_err();
    assert_eq!(err, Error::KeyNotFound("X".to_string()));
}

#[test]
fn get_value_array_root() {
    let err = get_value("[1, 2]", &["A"]).unwrap_err();
    assert_eq!(err, Error::RootNotObject);
}

// ============================================================================
// Structural round trips
// ============================================================================

fn obj(entries: Vec<(&str, Value)>) -> Value {
    let map: BTreeMap<String, Value> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    Value::Object(map)
}

#[test]
fn parse_deeply_nested_object() {
    let input = r#"{"A":"a", "B": {"C":1, "D":2, "F":{"J":"SQ","Y":100000}}, "E":9}"#;
    let expected = obj(vec![
        ("A", Value::String("a".to_string())),
        (
            "B",
            obj(vec![
                ("C", Value::Number(1.0)),
                ("D", Value::Number(2.0)),
                (
                    "F",
                    obj(vec![
                        ("J", Value::String("SQ".to_string())),
                        ("Y", Value::Number(100000.0)),
                    ]),
                ),
            ]),
        ),
        ("E", Value::Number(9.0)),
    ]);
    assert_eq!(parse(input).unwrap(), expected);
}

#[test]
fn parse_flat_object() {
    let expected = obj(vec![
        ("A", Value::String("a".to_string())),
        ("E", Value::Number(9.0)),
    ]);
    assert_eq!(parse(r#"{"A":"a", "E":9}"#).unwrap(), expected);
}

#[test]
fn parse_mixed_array() {
    let input = r#"[1,2,3,"x","y", {"A":"a","B":"b","C":[11,12,13]}]"#;
    let result = parse(input).unwrap();

    let items = result.as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0], Value::Number(1.0));
    assert_eq!(items[3], Value::String("x".to_string()));

    let last = items.last().unwrap();
    assert!(last.is_object());
    assert_eq!(
        last.get("C").unwrap(),
        &Value::Array(vec![
            Value::Number(11.0),
            Value::Number(12.0),
            Value::Number(13.0),
        ])
    );
}

#[test]
fn parse_is_idempotent() {
    let first = parse(SAMPLE).unwrap();
    let second = parse(SAMPLE).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn render_preserves_keys_and_nesting() {
    let value = parse(SAMPLE).unwrap();
    let text = render(&value);

    for key in ["A", "B", "C", "D", "E"] {
        assert!(text.contains(key), "missing key {key} in: {text}");
    }
    // Nested object opens a second brace level.
    assert_eq!(text.matches('{').count(), 2);
    assert_eq!(text.matches('}').count(), 2);
}

#[test]
fn render_same_input_same_output() {
    let a = render(&parse(SAMPLE).unwrap());
    let b = render(&parse(SAMPLE).unwrap());
    assert_eq!(a, b);
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn missing_value_after_colon_is_grammar_error() {
    let err = parse(r#"{"A":}"#).unwrap_err();
    assert!(err.is_grammar());
}

#[test]
fn malformed_inputs_are_rejected() {
    let cases = [
        r#"{"a" 1}"#,     // missing colon
        r#"{"a": 1,}"#,   // trailing comma in object
        "[1, 2,]",        // trailing comma in array
        "[1, 2",          // unclosed array
        r#"{"a": 1"#,     // unclosed object
        "[1] [2]",        // trailing content
        "{,}",            // leading comma
        "",               // empty input
    ];
    for input in cases {
        let err = parse(input).unwrap_err();
        assert!(err.is_grammar(), "expected grammar error for {input:?}");
    }
}

#[test]
fn lexical_errors_carry_line_numbers() {
    let err = parse("{\n  \"a\": @\n}").unwrap_err();
    assert_eq!(err, Error::lexical(2, "unexpected token"));
}

// ============================================================================
// Differential check against serde_json
// ============================================================================

fn assert_matches_serde(mine: &Value, theirs: &serde_json::Value) {
    match (mine, theirs) {
        (Value::Null, serde_json::Value::Null) => {}
        (Value::Bool(a), serde_json::Value::Bool(b)) => assert_eq!(a, b),
        (Value::Number(a), serde_json::Value::Number(b)) => {
            assert_eq!(Some(*a), b.as_f64());
        }
        (Value::String(a), serde_json::Value::String(b)) => assert_eq!(a, b),
        (Value::Array(a), serde_json::Value::Array(b)) => {
            assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(b) {
                assert_matches_serde(x, y);
            }
        }
        (Value::Object(a), serde_json::Value::Object(b)) => {
            assert_eq!(a.len(), b.len());
            for (key, x) in a {
                let y = b.get(key).unwrap_or_else(|| panic!("missing key {key}"));
                assert_matches_serde(x, y);
            }
        }
        _ => panic!("kind mismatch: {mine:?} vs {theirs:?}"),
    }
}

#[test]
fn differential_against_serde_json() {
    let documents = [
        SAMPLE,
        r#"[1,2,3,"x","y", {"A":"a","B":"b","C":[11,12,13]}]"#,
        r#"{"escaped": "line\nbreak A \"quote\"", "neg": -5, "frac": 0.5, "exp": 1.5e-2}"#,
        r#"{"empty_obj": {}, "empty_arr": [], "flag": false, "nothing": null}"#,
        "true",
        "-120.45",
        r#""😀 top-level string""#,
    ];

    for input in documents {
        let mine = parse(input).unwrap();
        let theirs: serde_json::Value = serde_json::from_str(input).unwrap();
        assert_matches_serde(&mine, &theirs);
    }
}
