use super::*;

#[test]
fn plain_membership() {
    let class = CharClass::parse(b"[abc]", 0, 5);
    assert!(!class.is_negated());
    assert!(class.contains(b'a'));
    assert!(class.contains(b'c'));
    assert!(!class.contains(b'd'));
}

#[test]
fn negated_membership() {
    let class = CharClass::parse(b"[^abc]", 0, 6);
    assert!(class.is_negated());
    assert!(!class.contains(b'a'));
    assert!(class.contains(b'd'));
}

#[test]
fn empty_class_matches_nothing() {
    let class = CharClass::parse(b"[]", 0, 2);
    for byte in 0..=u8::MAX {
        assert!(!class.contains(byte));
    }
}

#[test]
fn negated_empty_class_matches_everything() {
    let class = CharClass::parse(b"[^]", 0, 3);
    for byte in 0..=u8::MAX {
        assert!(class.contains(byte));
    }
}

#[test]
fn escaped_bracket_is_a_member() {
    let class = CharClass::parse(br"[a\]b]", 0, 6);
    assert!(class.contains(b'a'));
    assert!(class.contains(b']'));
    assert!(class.contains(b'b'));
    assert!(!class.contains(b'\\'));
}

#[test]
fn escaped_backslash_is_a_member() {
    let class = CharClass::parse(br"[\\x]", 0, 5);
    assert!(class.contains(b'\\'));
    assert!(class.contains(b'x'));
}

#[test]
fn caret_after_the_first_position_is_a_member() {
    let class = CharClass::parse(b"[a^]", 0, 4);
    assert!(!class.is_negated());
    assert!(class.contains(b'^'));
    assert!(class.contains(b'a'));
}

#[test]
fn unterminated_class_takes_the_remaining_bytes() {
    let class = CharClass::parse(b"[abc", 0, 4);
    assert!(class.contains(b'a'));
    assert!(class.contains(b'c'));
    assert!(!class.contains(b'['));
}
