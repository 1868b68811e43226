// tests/structure_tests.rs

use caraway_lang::parse;
use caraway_lang::structure::{to_json, to_json_pretty};
use serde_json::{Value, json};

// ============================================================================
// Node Shapes
// ============================================================================

#[test]
fn test_binary_structure() {
    let expr = parse("age gt 5").unwrap();

    assert_eq!(
        expr.to_structure(),
        json!({
            "type": "binary",
            "operator": "gt",
            "left": { "type": "member", "name": "age" },
            "right": { "type": "literal", "value": 5 }
        })
    );
}

#[test]
fn test_nested_member_structure() {
    let expr = parse("owner/age gt 5").unwrap();

    assert_eq!(
        expr.to_structure()["left"],
        json!({
            "type": "member",
            "name": "owner",
            "nested": { "type": "member", "name": "age" }
        })
    );
}

#[test]
fn test_deep_path_structure() {
    let expr = parse("owner/address/city").unwrap();

    assert_eq!(
        expr.to_structure(),
        json!({
            "type": "member",
            "name": "owner",
            "nested": {
                "type": "member",
                "name": "address",
                "nested": { "type": "member", "name": "city" }
            }
        })
    );
}

#[test]
fn test_absent_nested_is_omitted() {
    let expr = parse("age").unwrap();
    let structure = expr.to_structure();

    assert_eq!(structure["type"], json!("member"));
    assert!(structure.get("nested").is_none());
}

#[test]
fn test_combinator_structure() {
    let expr = parse(r#"age gt 5 and name eq "bob""#).unwrap();

    assert_eq!(
        expr.to_structure(),
        json!({
            "type": "binary",
            "operator": "and",
            "left": {
                "type": "binary",
                "operator": "gt",
                "left": { "type": "member", "name": "age" },
                "right": { "type": "literal", "value": 5 }
            },
            "right": {
                "type": "binary",
                "operator": "eq",
                "left": { "type": "member", "name": "name" },
                "right": { "type": "literal", "value": "bob" }
            }
        })
    );
}

#[test]
fn test_quantifier_structure() {
    let expr = parse("pets.any(p: p/age gt 5)").unwrap();
    let structure = expr.to_structure();

    assert_eq!(
        structure,
        json!({
            "type": "method_call",
            "name": "any",
            "member": { "type": "member", "name": "pets" },
            "lambda_body": {
                "type": "lambda",
                "parameter": { "type": "parameter", "name": "p" },
                "body": {
                    "type": "binary",
                    "operator": "gt",
                    "left": {
                        "type": "member",
                        "name": "p",
                        "nested": { "type": "member", "name": "age" }
                    },
                    "right": { "type": "literal", "value": 5 }
                }
            }
        })
    );
    // A lambda call never carries positional args
    assert!(structure.get("args").is_none());
}

#[test]
fn test_function_args_structure() {
    let expr = parse(r#"name.startswith("bo")"#).unwrap();
    let structure = expr.to_structure();

    assert_eq!(
        structure,
        json!({
            "type": "method_call",
            "name": "startswith",
            "member": { "type": "member", "name": "name" },
            "args": [ { "type": "literal", "value": "bo" } ]
        })
    );
    assert!(structure.get("lambda_body").is_none());
}

#[test]
fn test_multiple_args_keep_their_order() {
    let expr = parse(r#"name.contains("ob", 1, true)"#).unwrap();

    assert_eq!(
        expr.to_structure()["args"],
        json!([
            { "type": "literal", "value": "ob" },
            { "type": "literal", "value": 1 },
            { "type": "literal", "value": true }
        ])
    );
}

// ============================================================================
// Literal Values
// ============================================================================

#[test]
fn test_literal_value_types() {
    let test_cases = vec![
        ("flag eq true", json!(true)),
        ("flag eq false", json!(false)),
        (r#"name eq "bob""#, json!("bob")),
        ("score ge 2.5", json!(2.5)),
        ("age gt -3", json!(-3)),
        ("owner ne null", Value::Null),
    ];

    for (input, expected) in test_cases {
        let expr = parse(input).unwrap_or_else(|e| panic!("Failed for input: {}: {}", input, e));
        assert_eq!(
            expr.to_structure()["right"]["value"],
            expected,
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_operator_words_in_output() {
    let test_cases = vec![
        ("age eq 5", "eq"),
        ("age ne 5", "ne"),
        ("age gt 5", "gt"),
        ("age ge 5", "ge"),
        ("age lt 5", "lt"),
        ("age le 5", "le"),
        ("a gt 1 and b gt 2", "and"),
        ("a gt 1 or b gt 2", "or"),
    ];

    for (input, expected) in test_cases {
        let expr = parse(input).unwrap_or_else(|e| panic!("Failed for input: {}: {}", input, e));
        assert_eq!(
            expr.to_structure()["operator"],
            json!(expected),
            "Failed for input: {}",
            input
        );
    }
}

// ============================================================================
// String Forms
// ============================================================================

#[test]
fn test_compact_json() {
    let expr = parse("age gt 5").unwrap();
    assert_eq!(
        to_json(&expr),
        r#"{"left":{"name":"age","type":"member"},"operator":"gt","right":{"type":"literal","value":5},"type":"binary"}"#
    );
}

#[test]
fn test_compact_json_matches_structure() {
    let expr = parse("pets.any(p: p/age gt 5)").unwrap();
    assert_eq!(to_json(&expr), expr.to_structure().to_string());
}

#[test]
fn test_pretty_json_is_indented() {
    let expr = parse("age gt 5").unwrap();
    let pretty = to_json_pretty(&expr);

    assert!(pretty.starts_with("{\n"));
    assert!(pretty.contains("\n  \"type\": \"binary\""));
}

#[test]
fn test_pretty_json_round_trips() {
    let expr = parse(r#"pets.any(p: p/age gt 5) and name eq "bob""#).unwrap();
    let parsed: Value = serde_json::from_str(&to_json_pretty(&expr)).unwrap();
    assert_eq!(parsed, expr.to_structure());
}

#[test]
fn test_output_is_deterministic() {
    let input = r#"age gt 5 and pets.any(p: p/name eq "rex")"#;
    let first = to_json(&parse(input).unwrap());
    let second = to_json(&parse(input).unwrap());
    assert_eq!(first, second);
}
