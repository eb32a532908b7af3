use proptest::prelude::*;
use text_diff::{cleanup_merge, cleanup_semantic, diff_with_config, source_text, target_text, DiffConfig};

fn unlimited() -> DiffConfig {
    DiffConfig::most_precise()
}

proptest! {
    #[test]
    fn round_trip_reconstructs_inputs(text1 in ".{0,120}", text2 in ".{0,120}") {
        let script = diff_with_config(&text1, &text2, &unlimited());
        prop_assert_eq!(&text1, &source_text(&script));
        prop_assert_eq!(&text2, &target_text(&script));
    }

    #[test]
    fn round_trip_on_similar_texts(base in "[ab\n]{0,80}", tweak in "[ab]{0,6}") {
        // Similar inputs exercise the affix, half-match, and slide paths
        // harder than independent random pairs.
        let text2 = format!("{tweak}{base}");
        let script = diff_with_config(&base, &text2, &unlimited());
        prop_assert_eq!(&base, &source_text(&script));
        prop_assert_eq!(&text2, &target_text(&script));
    }

    #[test]
    fn engine_output_is_merge_stable(text1 in ".{0,80}", text2 in ".{0,80}") {
        let script = diff_with_config(&text1, &text2, &unlimited());
        let merged = cleanup_merge(script.clone());
        prop_assert_eq!(script, merged);
    }

    #[test]
    fn semantic_cleanup_preserves_round_trip(text1 in "[abc ]{0,60}", text2 in "[abc ]{0,60}") {
        let script = diff_with_config(&text1, &text2, &unlimited());
        let cleaned = cleanup_semantic(script);
        prop_assert_eq!(&text1, &source_text(&cleaned));
        prop_assert_eq!(&text2, &target_text(&cleaned));
    }

    #[test]
    fn scripts_never_carry_empty_ops(text1 in ".{0,60}", text2 in ".{0,60}") {
        let script = diff_with_config(&text1, &text2, &unlimited());
        prop_assert!(script.iter().all(|op| !op.text().is_empty()));
    }
}
