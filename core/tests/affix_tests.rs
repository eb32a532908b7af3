use text_diff::{common_overlap_length, common_prefix_length, common_suffix_length};

#[test]
fn prefix_null_case() {
    assert_eq!(0, common_prefix_length("abc", "xyz"));
}

#[test]
fn prefix_non_null_case() {
    assert_eq!(4, common_prefix_length("1234abcdef", "1234xyz"));
}

#[test]
fn prefix_whole_case() {
    assert_eq!(4, common_prefix_length("1234", "1234xyz"));
}

#[test]
fn prefix_empty_inputs() {
    assert_eq!(0, common_prefix_length("", "abc"));
    assert_eq!(0, common_prefix_length("abc", ""));
    assert_eq!(0, common_prefix_length("", ""));
}

#[test]
fn suffix_null_case() {
    assert_eq!(0, common_suffix_length("abc", "xyz"));
}

#[test]
fn suffix_non_null_case() {
    assert_eq!(4, common_suffix_length("abcdef1234", "xyz1234"));
}

#[test]
fn suffix_whole_case() {
    assert_eq!(4, common_suffix_length("1234", "xyz1234"));
}

#[test]
fn overlap_null_case() {
    assert_eq!(0, common_overlap_length("", "abcd"));
    assert_eq!(0, common_overlap_length("abcd", ""));
}

#[test]
fn overlap_whole_case() {
    assert_eq!(3, common_overlap_length("abc", "abcd"));
}

#[test]
fn overlap_no_overlap() {
    assert_eq!(0, common_overlap_length("123456", "abcd"));
}

#[test]
fn overlap_basic() {
    assert_eq!(3, common_overlap_length("123456xxx", "xxxabcd"));
}

#[test]
fn overlap_equal_inputs() {
    assert_eq!(6, common_overlap_length("123456", "123456"));
}

#[test]
fn overlap_never_normalizes_unicode() {
    // U+FB01 is the "fi" ligature; scalar-exact comparison must not treat
    // it as equal to its expansion.
    assert_eq!(0, common_overlap_length("fi", "\u{fb01}i"));
}
