// tests/property_tests.rs

//! Property-based tests for the query language front end.
//!
//! These use `proptest` to check invariants over generated inputs:
//!
//! 1. **No panics** - lexing and parsing arbitrary input always returns
//! 2. **Spans stay in bounds** - every error span fits the input
//! 3. **Generated queries parse** - well-formed inputs built from the
//!    grammar always produce the matching tree shape
//! 4. **Errors stay user-facing** - no internal type names leak into
//!    messages

use proptest::prelude::*;

use caraway_lang::ast::Expr;
use caraway_lang::error::{ParseError, QueryError};
use caraway_lang::lexer::Lexer;
use caraway_lang::parse;
use caraway_lang::structure::to_json;
use caraway_lang::visitor::walk_expression;

// ============================================================================
// Generators
// ============================================================================

/// Words the lexer claims for itself; none of them can be an identifier.
const RESERVED: &[&str] = &[
    "eq",
    "ne",
    "gt",
    "ge",
    "lt",
    "le",
    "and",
    "or",
    "true",
    "false",
    "null",
    "any",
    "startswith",
    "endswith",
    "contains",
];

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}".prop_filter("reserved words are not identifiers", |s| {
        !RESERVED.contains(&s.as_str())
    })
}

fn member_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(identifier(), 1..=4)
}

const COMPARISONS: &[&str] = &["eq", "ne", "gt", "ge", "lt", "le"];

fn comparison_word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(COMPARISONS)
}

fn literal_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i32>().prop_map(|n| n.to_string()),
        "[a-z ]{0,8}".prop_map(|s| format!("\"{}\"", s)),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
    ]
}

/// Query fragments for composing near-valid inputs.
const FRAGMENTS: &[&str] = &[
    "age gt 5",
    "owner/age gt 5",
    "owner/address/city eq \"york\"",
    "a gt 1 and b lt 2",
    "a gt 1 or b gt 2 and c ne 3",
    "(age gt 5) or (age lt 1)",
    "((flag eq true))",
    "pets.any(p: p/age gt 5)",
    "pets.any(p: p/toys.any(t: t/price gt 1))",
    "name.startswith(\"bo\")",
    "name.contains(\"ob\", 1)",
    "name.endswith(\"b\") and owner ne null",
    "score ge 2.5",
];

fn valid_fragment() -> impl Strategy<Value = String> {
    prop::sample::select(FRAGMENTS).prop_map(std::string::ToString::to_string)
}

/// A valid fragment cut at a random character.
fn truncated_fragment() -> impl Strategy<Value = String> {
    valid_fragment().prop_flat_map(|s| {
        let len = s.chars().count();
        (0..len).prop_map(move |cut| s.chars().take(cut).collect())
    })
}

/// A valid fragment with its closing parens dropped.
fn unbalanced_fragment() -> impl Strategy<Value = String> {
    valid_fragment().prop_map(|s| s.replace(')', ""))
}

const GLUE: &[&str] = &["and", "or", "gt", ""];

/// Two fragments joined by a word that may or may not belong between them.
fn spliced_fragments() -> impl Strategy<Value = String> {
    (valid_fragment(), prop::sample::select(GLUE), valid_fragment())
        .prop_map(|(a, glue, b)| format!("{} {} {}", a, glue, b))
}

fn near_valid_query() -> impl Strategy<Value = String> {
    prop_oneof![
        valid_fragment(),
        truncated_fragment(),
        unbalanced_fragment(),
        spliced_fragments(),
    ]
}

/// Internal names that must never show up in an error message.
const INTERNAL_NAMES: &[&str] = &[
    "Expr::",
    "TokenKind",
    "LiteralValue",
    "QueryError",
    "unwrap",
    "panic",
    "unreachable",
];

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Lexing arbitrary input returns a result for every token and
    /// terminates.
    #[test]
    fn lexer_never_panics(input in "\\PC{0,200}") {
        for result in Lexer::new(&input) {
            let _ = result;
        }
    }

    /// Token spans never overlap and always move forward.
    #[test]
    fn token_spans_are_ordered(input in valid_fragment()) {
        let tokens: Vec<_> = Lexer::new(&input)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let mut last_end = 0;
        for token in &tokens {
            prop_assert!(
                token.span.start >= last_end,
                "Span {} overlaps the previous token for input {:?}",
                token.span,
                input,
            );
            prop_assert!(token.span.start < token.span.end);
            last_end = token.span.end;
        }
    }

    /// Parsing arbitrary input returns a result, never a panic.
    #[test]
    fn parser_never_panics(input in "\\PC{0,200}") {
        let _ = parse(&input);
    }

    /// Near-valid input exercises the error paths without panicking.
    #[test]
    fn parser_never_panics_near_valid(input in near_valid_query()) {
        let _ = parse(&input);
    }

    /// Every error span fits inside the input, measured in characters.
    #[test]
    fn error_spans_stay_within_input(input in "\\PC{0,200}") {
        if let Err(err) = parse(&input) {
            if let Some(span) = err.span() {
                let len = input.chars().count();
                prop_assert!(
                    span.start <= span.end,
                    "Span {} is reversed for input {:?}",
                    span,
                    input,
                );
                prop_assert!(
                    span.end <= len,
                    "Span {} exceeds input length {} for input {:?}",
                    span,
                    len,
                    input,
                );
            }
        }
    }

    /// Everything in the fragment corpus is a well-formed query.
    #[test]
    fn corpus_fragments_parse(input in valid_fragment()) {
        let result = parse(&input);
        prop_assert!(result.is_ok(), "Failed for input {:?}: {:?}", input, result);
    }

    /// A generated comparison always parses to a binary root.
    #[test]
    fn generated_comparisons_parse(
        segments in member_path(),
        op in comparison_word(),
        value in literal_text(),
    ) {
        let input = format!("{} {} {}", segments.join("/"), op, value);
        let expr = parse(&input).unwrap();
        prop_assert!(
            matches!(expr, Expr::Binary { .. }),
            "Expected a binary root for input {:?}, got {:?}",
            input,
            expr,
        );
    }

    /// A member chain keeps every segment, in order.
    #[test]
    fn member_chains_keep_every_segment(segments in member_path()) {
        let input = segments.join("/");
        let expr = parse(&input).unwrap();

        let mut names = Vec::new();
        walk_expression(&expr, &mut |expr| {
            if let Expr::Member { name, .. } = expr {
                names.push(name.clone());
            }
        });
        prop_assert_eq!(names, segments);
    }

    /// Lambda bodies accept their own binder and reject any other head.
    #[test]
    fn binder_gates_the_lambda_body(
        binder in identifier(),
        other in identifier(),
        field in identifier(),
    ) {
        prop_assume!(binder != other);

        let matching = format!("pets.any({}: {}/{} gt 5)", binder, binder, field);
        prop_assert!(
            parse(&matching).is_ok(),
            "Failed for input: {}",
            matching,
        );

        let foreign = format!("pets.any({}: {}/{} gt 5)", binder, other, field);
        let result = parse(&foreign);
        prop_assert!(
            matches!(
                result,
                Err(QueryError::Parse(ParseError::BinderMismatch { .. }))
            ),
            "Expected a binder mismatch for input {:?}, got {:?}",
            foreign,
            result,
        );
    }

    /// Parsing the same input twice gives the same tree.
    #[test]
    fn parsing_is_deterministic(
        segments in member_path(),
        op in comparison_word(),
        value in literal_text(),
    ) {
        let input = format!("{} {} {}", segments.join("/"), op, value);
        let first = to_json(&parse(&input).unwrap());
        let second = to_json(&parse(&input).unwrap());
        prop_assert_eq!(first, second);
    }

    /// Error messages never leak internal type names.
    #[test]
    fn error_messages_stay_user_facing(input in near_valid_query()) {
        if let Err(err) = parse(&input) {
            let message = err.to_string();
            for internal in INTERNAL_NAMES {
                prop_assert!(
                    !message.contains(internal),
                    "Message {:?} leaks {:?} for input {:?}",
                    message,
                    internal,
                    input,
                );
            }
        }
    }
}
