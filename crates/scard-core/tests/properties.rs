//! Property tests for the invariants every host relies on: style spans cover the text exactly,
//! diagnostic lines exist, and insertion plans always splice cleanly.

use proptest::prelude::*;
use scard_core::{
    RARITY_VALUES, compute_styles, get_suggestions, resolve_insertion, spans_len, validate,
};

/// Fragments chosen to hit every lexer branch, line-format failure and multibyte column.
fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "\n", "\r", "\"", "=", "#", " ", "\t", "id", "rarity", "npcName", "npcSpeed", "npcPassing",
        "COMMON", "co", "x", "7", "1.5", "f", ".", "inf", "é", "🚀", "九",
    ])
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..48).prop_map(|parts| parts.concat())
}

fn line() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..16)
        .prop_map(|parts| parts.concat().replace('\n', ""))
}

proptest! {
    #[test]
    fn spans_cover_every_char(text in document()) {
        let diagnostics = validate(&text);
        let spans = compute_styles(&text, &diagnostics);
        prop_assert_eq!(spans_len(&spans), text.chars().count());
        prop_assert!(spans.iter().all(|span| span.length > 0));
        prop_assert!(spans.windows(2).all(|pair| pair[0].tags != pair[1].tags));
    }

    #[test]
    fn diagnostic_lines_exist(text in document()) {
        let line_count = text.split('\n').count();
        for diagnostic in validate(&text) {
            if let Some(line) = diagnostic.line {
                prop_assert!(line < line_count, "line {} of {} in {:?}", line, line_count, text);
            }
        }
    }

    #[test]
    fn validation_is_deterministic(text in document()) {
        prop_assert_eq!(validate(&text), validate(&text));
    }

    #[test]
    fn insertion_plans_splice_cleanly(line in line()) {
        let line_len = line.chars().count();
        for caret in 0..=line_len {
            let mut candidates = get_suggestions(&line, caret);
            candidates.extend([RARITY_VALUES[0], "npcName"]);

            for suggestion in candidates {
                let plan = resolve_insertion(&line, caret, suggestion);
                prop_assert!(plan.is_some(), "caret {} in {:?}", caret, line);
                let Some(plan) = plan else { continue };

                prop_assert_eq!(plan.replace_end, caret);
                prop_assert!(plan.replace_start <= caret);
                prop_assert_eq!(plan.new_caret, plan.replace_start + plan.text.chars().count());

                let rewritten = plan.apply(&line);
                prop_assert!(rewritten.is_some(), "plan {:?} on {:?}", plan, line);
                let Some(rewritten) = rewritten else { continue };
                prop_assert_eq!(
                    rewritten.chars().count(),
                    line_len - (caret - plan.replace_start) + plan.text.chars().count()
                );
                let inserted: String = rewritten
                    .chars()
                    .skip(plan.replace_start)
                    .take(plan.new_caret - plan.replace_start)
                    .collect();
                prop_assert_eq!(inserted, plan.text);
            }
        }
    }

    #[test]
    fn out_of_range_caret_has_no_plan(line in line(), past in 1usize..4) {
        let caret = line.chars().count() + past;
        prop_assert!(get_suggestions(&line, caret).is_empty());
        prop_assert!(resolve_insertion(&line, caret, "id").is_none());
    }
}
