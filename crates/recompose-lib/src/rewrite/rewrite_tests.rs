use crate::ErrorKind;
use crate::rewrite::emulate::{FOLDED_END, FOLDED_START};
use crate::rewrite::promote::{WIDE_ANY_UNIT, WIDE_DOT};
use crate::rewrite::{emulate_flags, promote_to_wide, renumber_refs};

#[test]
fn promotion_escapes_stray_braces_and_brackets() {
    insta::assert_snapshot!(promote_to_wide("a{b}]{1,2}[{]"), @r"a\{b\}\]{1,2}[{]");
}

#[test]
fn promotion_spells_out_any_character() {
    assert_eq!(promote_to_wide("a."), format!("a{WIDE_DOT}"));
    assert_eq!(promote_to_wide("[^]"), WIDE_ANY_UNIT);
    assert_eq!(promote_to_wide(r"[.]\."), r"[.]\.");
}

#[test]
fn dot_all_outside_classes() {
    assert_eq!(emulate_flags("a.b", true, false), "a[^]b");
    assert_eq!(emulate_flags(r"[.]\.", true, false), r"[.]\.");
    assert_eq!(emulate_flags("a.b", false, false), "a.b");
}

#[test]
fn folds_anchors_at_any_depth() {
    assert_eq!(
        emulate_flags("^a$", false, true),
        format!("{FOLDED_START}a{FOLDED_END}")
    );
    assert_eq!(emulate_flags("(a^)", false, true), format!("(a{FOLDED_START})"));
    assert_eq!(emulate_flags("[$^]", false, true), "[$^]");
}

#[test]
fn folding_is_idempotent() {
    let once = emulate_flags("^a|b$", false, true);
    assert_eq!(emulate_flags(&once, false, true), once);
}

#[test]
fn shifts_back_references() {
    assert_eq!(renumber_refs(r"(a)\1", 1).unwrap(), r"(a)\2");
    assert_eq!(renumber_refs(r"[\1]\1", 2).unwrap(), r"[\1]\3");
    assert_eq!(renumber_refs(r"\12", 3).unwrap(), r"\15");
    assert_eq!(renumber_refs(r"\\1", 3).unwrap(), r"\\1");
}

#[test]
fn back_reference_overflow() {
    let err = renumber_refs(r"\1", 99).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.to_string(), r"too many back references: \100");
}

#[test]
fn resolves_deferred_markers() {
    assert_eq!(renumber_refs("(?:$ ^d:0,n:2)", 5).unwrap(), r"\2");
    assert_eq!(renumber_refs("(?:$ ^d:2,n:1)", 0).unwrap(), "(?:$ ^d:1,n:1)");
    assert_eq!(renumber_refs("a(?:$ ^d:0,n:1)(b)", 0).unwrap(), r"a\1(b)");
}

#[test]
fn group_names_are_not_folded() {
    assert_eq!(
        emulate_flags(r"(?<a$>x)\k<a$>$", false, true),
        format!(r"(?<a$>x)\k<a$>{FOLDED_END}")
    );
}

#[test]
fn resolved_markers_must_name_a_group() {
    let err = renumber_refs("(a)(?:$ ^d:0,n:0)", 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.to_string(), r"invalid back reference: \0");

    let err = renumber_refs("(?:$ ^d:0,n:100)", 0).unwrap_err();
    assert_eq!(err.to_string(), r"too many back references: \100");

    assert_eq!(renumber_refs("(?:$ ^d:1,n:0)", 0).unwrap(), "(?:$ ^d:0,n:0)");
}
