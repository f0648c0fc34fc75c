use pretty_assertions::assert_eq;
use scard_core::{Diagnostic, Issue, Severity, validate};

fn messages(text: &str) -> Vec<(i64, String)> {
    validate(text)
        .iter()
        .map(|d| (d.line_number(), d.message()))
        .collect()
}

#[test]
fn test_empty_document_only_misses_id() {
    let diagnostics = validate("");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, None);
    assert_eq!(diagnostics[0].line_number(), -1);
    assert!(diagnostics[0].message().starts_with("missing"));
    assert!(diagnostics[0].message().contains("id"));
}

#[test]
fn test_minimal_document_is_valid() {
    assert!(validate("id = \"c1\"").is_empty());
}

#[test]
fn test_rarity_quoting_and_case() {
    let unquoted = validate("id = \"c1\"\nrarity = COMMON");
    assert_eq!(
        unquoted,
        vec![Diagnostic::at_line(
            1,
            Issue::EnumNotQuoted {
                key: "rarity".to_string()
            }
        )]
    );

    assert!(validate("id = \"c1\"\nrarity = \"common\"").is_empty());
}

#[test]
fn test_rarity_invalid_and_unquoted_both_reported() {
    let diagnostics = validate("id = \"c1\"\nrarity = mythic");
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.line == Some(1)));
    assert_eq!(
        diagnostics[0].message(),
        "invalid rarity value 'mythic', allowed: COMMON, UNCOMMON, RARE, EPIC, LEGENDARY"
    );
}

#[test]
fn test_npc_speed_suffix() {
    assert_eq!(validate("id = \"c1\"\nnpcSpeed = 2").len(), 1);
    assert!(validate("id = \"c1\"\nnpcSpeed = 2f").is_empty());
    assert_eq!(
        messages("id = \"c1\"\nnpcSpeed = 1.2.3f"),
        vec![(
            1,
            "value for 'npcSpeed' ('1.2.3') is not a valid floating-point number".to_string()
        )]
    );
}

#[test]
fn test_line_format_errors_stop_only_their_line() {
    let text = "just words\n = 5\nnpcName =\nid = \"ok\"\nnpcPassing = ten";
    assert_eq!(
        messages(text),
        vec![
            (0, "malformed line, expected 'key = value'".to_string()),
            (1, "key cannot be empty".to_string()),
            (2, "value for 'npcName' cannot be empty".to_string()),
            (4, "value for 'npcPassing' ('ten') is not a valid integer".to_string()),
        ]
    );
}

#[test]
fn test_split_on_first_equals_only() {
    // The value keeps its own '=' characters.
    assert!(validate("id = \"a=b\"").is_empty());
}

#[test]
fn test_unknown_key_is_warning_and_not_checked_further() {
    let diagnostics = validate("id = \"c1\"\ncolor = red");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].message(), "unknown key 'color'");
}

#[test]
fn test_field_names_are_case_sensitive() {
    let diagnostics = validate("ID = \"c1\"");
    assert_eq!(
        diagnostics,
        vec![
            Diagnostic::at_line(
                0,
                Issue::UnknownKey {
                    key: "ID".to_string()
                }
            ),
            Diagnostic::document(Issue::MissingMandatoryField {
                name: "id".to_string()
            }),
        ]
    );
}

#[test]
fn test_id_with_shape_error_still_counts_as_defined() {
    let diagnostics = validate("id = unquoted");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, Some(0));
}

#[test]
fn test_comments_blank_lines_and_crlf() {
    let text = "# header\r\n\r\n   # indented comment\r\nid = \"c1\"\r\nnpcShooting = 7\r\n";
    assert!(validate(text).is_empty());
}

#[test]
fn test_trailing_text_after_closing_quote_is_unchecked() {
    // Only the outer quotes are inspected.
    assert!(validate("id = \"c1\" extra \"x\"").is_empty());
}

#[test]
fn test_validation_is_deterministic() {
    let text = "rarity = nope\nfoo = 1\nnpcSpeed = xf\n = \nid =";
    assert_eq!(validate(text), validate(text));
}

#[test]
fn test_npc_speed_rejects_inf_and_nan() {
    assert_eq!(
        validate("id = \"a\"\nnpcSpeed = inff"),
        vec![Diagnostic::at_line(
            1,
            Issue::InvalidFloat {
                key: "npcSpeed".to_string(),
                literal: "inf".to_string()
            }
        )]
    );
    assert_eq!(validate("id = \"a\"\nnpcSpeed = NaNf").len(), 1);
}
