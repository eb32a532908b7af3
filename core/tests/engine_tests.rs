mod common;

use common::{del, eq, ins};
use text_diff::{diff, diff_with_config, source_text, target_text, Diff, DiffConfig};

#[test]
fn null_case() {
    assert_eq!(Vec::<Diff>::new(), diff("", ""));
}

#[test]
fn equality() {
    assert_eq!(vec![eq("abc")], diff("abc", "abc"));
}

#[test]
fn simple_insertion() {
    assert_eq!(vec![eq("ab"), ins("123"), eq("c")], diff("abc", "ab123c"));
}

#[test]
fn simple_deletion() {
    assert_eq!(vec![eq("a"), del("123"), eq("bc")], diff("a123bc", "abc"));
}

#[test]
fn two_insertions() {
    assert_eq!(
        vec![eq("a"), ins("123"), eq("b"), ins("456"), eq("c")],
        diff("abc", "a123b456c")
    );
}

#[test]
fn two_deletions() {
    assert_eq!(
        vec![eq("a"), del("123"), eq("b"), del("456"), eq("c")],
        diff("a123b456c", "abc")
    );
}

#[test]
fn single_scalar_replacement() {
    assert_eq!(vec![del("a"), ins("b")], diff("a", "b"));
}

#[test]
fn disjoint_scalars_with_shared_middle() {
    assert_eq!(
        vec![del("a"), ins("\u{0680}"), eq("x"), del("\t"), ins("\0")],
        diff("ax\t", "\u{0680}x\0")
    );
}

#[test]
fn merge_first_phase_shapes_output() {
    assert_eq!(
        vec![
            del("Apple"),
            ins("Banana"),
            eq("s are a"),
            ins("lso"),
            eq(" fruit."),
        ],
        diff("Apples are a fruit.", "Bananas are also fruit.")
    );
}

#[test]
fn overlapping_edits() {
    assert_eq!(
        vec![del("1"), eq("a"), del("y"), eq("b"), del("2"), ins("xab")],
        diff("1ayb2", "abxab")
    );
}

#[test]
fn merge_second_phase_shapes_output() {
    assert_eq!(
        vec![ins("xaxcx"), eq("abc"), del("y")],
        diff("abcy", "xaxcxabc")
    );
}

#[test]
fn long_tail_edits() {
    assert_eq!(
        vec![
            del("ABCD"),
            eq("a"),
            del("="),
            ins("-"),
            eq("bcd"),
            del("="),
            ins("-"),
            eq("efghijklmnopqrs"),
            del("EFGHIJKLMNOefg"),
        ],
        diff("ABCDa=bcd=efghijklmnopqrsEFGHIJKLMNOefg", "a-bcd-efghijklmnopqrs")
    );
}

#[test]
fn large_equality_via_half_match() {
    assert_eq!(
        vec![
            ins(" "),
            eq("a"),
            ins("nd"),
            eq(" [[Pennsylvania]]"),
            del(" and [[New"),
        ],
        diff("a [[Pennsylvania]] and [[New", " and [[Pennsylvania]]")
    );
}

#[test]
fn round_trip_reconstructs_both_inputs() {
    let cases = [
        ("", ""),
        ("abc", ""),
        ("", "abc"),
        ("abc", "abc"),
        ("mouse", "sofas"),
        ("a123bc", "abc"),
        ("The quick brown fox.", "The quick red fox jumped."),
        ("ax\t", "\u{0680}x\0"),
        ("caf\u{e9} d\u{e9}j\u{e0} vu", "cafe deja vu"),
    ];
    for (text1, text2) in cases {
        let script = diff(text1, text2);
        assert_eq!(text1, source_text(&script), "source for {text1:?}/{text2:?}");
        assert_eq!(text2, target_text(&script), "target for {text1:?}/{text2:?}");
    }
}

#[test]
fn unlimited_timeout_is_deterministic() {
    let config = DiffConfig::most_precise();
    let text1 = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
    let text2 = "Lorem dolor sit amet feugiat, consectetur elit adipiscing.";
    let first = diff_with_config(text1, text2, &config);
    for _ in 0..4 {
        assert_eq!(first, diff_with_config(text1, text2, &config));
    }
}

#[test]
fn scripts_are_canonical() {
    let cases = [
        ("mouse", "sofas"),
        ("a123b456c", "abc"),
        ("The quick brown fox.", "The quick red fox jumped."),
    ];
    for (text1, text2) in cases {
        let script = diff(text1, text2);
        for op in &script {
            assert!(!op.text().is_empty(), "empty op in {script:?}");
        }
        for pair in script.windows(2) {
            assert!(
                std::mem::discriminant(&pair[0]) != std::mem::discriminant(&pair[1]),
                "adjacent same-kind ops in {script:?}"
            );
            // A delete always precedes its paired insert.
            assert!(
                !(pair[0].is_insert() && pair[1].is_delete()),
                "insert before delete in {script:?}"
            );
        }
    }
}
