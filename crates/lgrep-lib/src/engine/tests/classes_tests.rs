//! Character classes, plain and negated.

use super::m;

#[test]
fn plain_class_matches_members() {
    assert!(m("apple", "[abc]"));
    assert!(m("cherry", "[abc]"));
    assert!(!m("dog", "[abc]"));
}

#[test]
fn negated_class_matches_non_members() {
    assert!(m("dog", "[^abc]"));
    assert!(!m("cab", "[^abc]"));
}

#[test]
fn class_in_context() {
    assert!(m("gray", "gr[ae]y"));
    assert!(m("grey", "gr[ae]y"));
    assert!(!m("groy", "gr[ae]y"));
}

#[test]
fn empty_class_never_matches() {
    assert!(!m("anything", "[]"));
    assert!(!m("", "[]"));
}

#[test]
fn negated_empty_class_matches_any_byte() {
    assert!(m("x", "[^]"));
    assert!(!m("", "[^]"));
}

#[test]
fn escaped_closing_bracket_is_a_member() {
    assert!(m("a]b", r"[\]]"));
    assert!(!m("ab", r"[\]]"));
}

#[test]
fn escaped_backslash_is_a_member() {
    assert!(m(r"a\b", r"[\\]"));
    assert!(!m("ab", r"[\\]"));
}

#[test]
fn caret_past_the_first_position_is_a_member() {
    assert!(m("x^y", "[a^]"));
    assert!(m("xay", "[a^]"));
    assert!(!m("xy", "[a^]"));
}

#[test]
fn pipe_inside_a_class_is_a_member_not_an_alternation() {
    assert!(m("a|b", "([|])"));
    assert!(!m("ab", "([x|y])x"));
}

#[test]
fn unterminated_class_runs_to_the_end_of_the_pattern() {
    // `[abc` scans to the pattern end and behaves as the class {a, b, c}
    assert!(m("banana", "[abc"));
    assert!(!m("xyz", "[abc"));
}
