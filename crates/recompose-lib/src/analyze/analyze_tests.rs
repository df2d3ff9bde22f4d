use crate::ErrorKind;
use crate::analyze::structure::{is_disjunction, is_single_atom, needs_wrapping_for_quantifier};
use crate::analyze::{count_captures, has_wide_problem, scan_refs};
use crate::metadata::RefSummary;

fn refs(has_refs: bool, has_final_ref: bool) -> RefSummary {
    RefSummary {
        has_refs,
        has_final_ref,
    }
}

fn needs(source: &str) -> Result<bool, ErrorKind> {
    needs_wrapping_for_quantifier(source, false, || is_single_atom(source)).map_err(|e| e.kind())
}

fn needs_wide(source: &str) -> Result<bool, ErrorKind> {
    needs_wrapping_for_quantifier(source, true, || is_single_atom(source)).map_err(|e| e.kind())
}

#[test]
fn counts_capturing_groups() {
    assert_eq!(count_captures(""), 0);
    assert_eq!(count_captures("(a)(b(c))"), 3);
    assert_eq!(count_captures("(?<year>\\d{4})"), 1);
}

#[test]
fn ignores_non_capturing_and_lookaround() {
    assert_eq!(count_captures("(?:a)(?=b)(?!c)(?<=d)(?<!e)"), 0);
}

#[test]
fn ignores_escaped_and_class_parens() {
    assert_eq!(count_captures(r"\(a\)[(]"), 0);
    assert_eq!(count_captures(r"[\]()](x)"), 1);
}

#[test]
fn finds_numeric_refs() {
    assert_eq!(scan_refs(r"(a)\1"), refs(true, true));
    assert_eq!(scan_refs(r"(a)\1b"), refs(true, false));
    assert_eq!(scan_refs("(?:$ ^d:1,n:2)"), refs(true, true));
}

#[test]
fn ignores_non_refs() {
    assert_eq!(scan_refs(r"[\1](a)"), refs(false, false));
    assert_eq!(scan_refs(r"\\1"), refs(false, false));
    assert_eq!(scan_refs(r"\0"), refs(false, false));
    assert_eq!(scan_refs(r"(?<a>.)\k<a>"), refs(false, false));
}

#[test]
fn top_level_disjunction() {
    assert!(is_disjunction("a|b"));
    assert!(is_disjunction("(a)|(b)"));
    assert!(is_disjunction("[(]|a"));
    assert!(is_disjunction("(?:$ ^d:1,n:1)|a"));
}

#[test]
fn nested_or_escaped_pipe_is_not_disjunction() {
    assert!(!is_disjunction("(a|b)"));
    assert!(!is_disjunction("[|]"));
    assert!(!is_disjunction(r"a\|b"));
    assert!(!is_disjunction("ab"));
}

#[test]
fn single_atoms() {
    assert!(is_single_atom("(a)"));
    assert!(is_single_atom("(?=a)"));
    assert!(is_single_atom("(a[)])"));
    assert!(is_single_atom("((a)|b)"));
    assert!(is_single_atom("(?:$ ^d:0,n:1)"));
}

#[test]
fn not_single_atoms() {
    assert!(!is_single_atom(""));
    assert!(!is_single_atom("(a)(b)"));
    assert!(!is_single_atom("(a)b"));
    assert!(!is_single_atom(r"(a\)"));
    assert!(!is_single_atom("[a]"));
}

#[test]
fn nothing_to_repeat() {
    for source in ["", "^", "$", r"\b", r"\B", "(?=a)", "(?<!a)"] {
        assert_eq!(needs(source), Err(ErrorKind::Syntax), "{source}");
    }
}

#[test]
fn quantifiable_without_wrapping() {
    for source in ["a", "\u{e9}", ".", r"\d", r"\1", r"\x41", "[abc]", r"[\]]", "[^]", "(ab)", "(a|b)"] {
        assert_eq!(needs(source), Ok(false), "{source}");
    }
}

#[test]
fn quantifiable_with_wrapping() {
    for source in ["ab", "a|b", "[a]b", "[a][b]", "(a)(b)", r"\k<a>", r"\p{L}"] {
        assert_eq!(needs(source), Ok(true), "{source}");
    }
}

#[test]
fn wide_escapes_are_atoms() {
    assert_eq!(needs_wide(r"\p{L}"), Ok(false));
    assert_eq!(needs_wide(r"\u{1F600}"), Ok(false));
    assert_eq!(needs_wide(r"\k<a>"), Ok(true));
}

#[test]
fn promotable_sources() {
    for source in [
        "a",
        ".",
        "[^]",
        r"\d\w",
        "a{2}",
        "a{",
        "a}",
        "]",
        r"\k<name>",
        r"(a)\1",
        r"\0",
        r"[\w-]",
        r"[a-z\d]",
        r"[^-\w]",
        r"\/",
        "(?=a)b*",
        "(?<=a)",
    ] {
        assert!(!has_wide_problem(source), "{source}");
    }
}

#[test]
fn unpromotable_sources() {
    for source in [
        r"\a",
        r"\-",
        r"\c",
        r"\012",
        r"\p{L}",
        r"\u{41}",
        r"\k<1x>",
        "(?=a)*",
        "(?!a){2}",
        r"[\w-a]",
        r"[a-\d]",
        r"[\k<a>]",
        r"[\1]",
        r"[\B]",
        "\\",
    ] {
        assert!(has_wide_problem(source), "{source}");
    }
}
