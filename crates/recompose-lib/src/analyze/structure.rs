//! Operator precedence properties: top-level alternation and single-atom shape.
//!
//! Both answers are conservative. A false negative only costs a redundant `(?:...)`, a
//! false positive would change the meaning of the composite.

use recompose_core::{ClassOpen, Escape, GroupOpen, Token, TokenKind, lex};

use crate::{Error, Result};

/// Whether the source has a `|` outside every group and class.
pub fn is_disjunction(source: &str) -> bool {
    if !source.contains('|') {
        return false;
    }
    let mut depth = 0i32;
    for token in lex(source) {
        if token.in_class() {
            continue;
        }
        match token.kind {
            TokenKind::GroupOpen(GroupOpen::Deferred { .. }) => {}
            TokenKind::GroupOpen(_) => depth += 1,
            TokenKind::GroupClose => depth -= 1,
            TokenKind::Pipe if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Whether the whole source is one group or assertion.
pub fn is_single_atom(source: &str) -> bool {
    let tokens = lex(source);
    if !matches!(tokens.first(), Some(t) if matches!(t.kind, TokenKind::GroupOpen(_))) {
        return false;
    }
    let mut depth = 0u32;
    for token in tokens.iter().filter(|t| !t.in_class()) {
        match token.kind {
            TokenKind::GroupOpen(GroupOpen::Deferred { .. }) if depth == 0 => {
                return token.span.end == source.len();
            }
            TokenKind::GroupOpen(GroupOpen::Deferred { .. }) => {}
            TokenKind::GroupOpen(_) => depth += 1,
            TokenKind::GroupClose => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return token.span.end == source.len();
                }
            }
            _ => {}
        }
    }
    false
}

/// Whether a quantifier needs `(?:...)` around `source` to apply to all of it.
///
/// `single_atom` is the memoized [`is_single_atom`] answer. Fails when there is nothing
/// that can be repeated: empty source, a bare anchor or a lookaround.
pub fn needs_wrapping_for_quantifier(
    source: &str,
    wide: bool,
    single_atom: impl FnOnce() -> bool,
) -> Result<bool> {
    if matches!(source, "" | "^" | "$" | r"\b" | r"\B") {
        return Err(nothing_to_repeat(source));
    }
    if source.chars().count() == 1 {
        return Ok(false);
    }

    let tokens = lex(source);
    if let [token] = tokens.as_slice() {
        match token.kind {
            TokenKind::Escape(escape) if is_atomic_escape(escape, wide) => return Ok(false),
            TokenKind::ClassOpen(ClassOpen::EmptyNegated) => return Ok(false),
            _ => {}
        }
    }
    if is_single_class(&tokens) {
        return Ok(false);
    }

    if !single_atom() {
        return Ok(true);
    }
    match tokens.first().map(|t| t.kind) {
        Some(TokenKind::GroupOpen(open)) if open.is_lookaround() => Err(nothing_to_repeat(source)),
        _ => Ok(false),
    }
}

fn nothing_to_repeat(source: &str) -> Error {
    let shown = if source.is_empty() { "(?:)" } else { source };
    Error::NothingToRepeat(shown.to_owned())
}

/// Escapes a quantifier can follow directly. `\p{..}` and `\u{..}` only mean one
/// character in wide mode; `\k<..>` is left wrapped.
fn is_atomic_escape(escape: Escape, wide: bool) -> bool {
    match escape {
        Escape::Char(c) => !matches!(c, 'b' | 'B'),
        Escape::ClassShorthand(_)
        | Escape::Null
        | Escape::Octal
        | Escape::Backref(_)
        | Escape::Hex
        | Escape::Unicode
        | Escape::Control => true,
        Escape::Property | Escape::UnicodeBraced => wide,
        Escape::NamedRef => false,
    }
}

/// `[...]` spanning the whole source.
fn is_single_class(tokens: &[Token]) -> bool {
    match tokens {
        [first, rest @ .., last] => {
            first.kind == TokenKind::ClassOpen(ClassOpen::Plain)
                && !first.in_class()
                && last.kind == TokenKind::ClassClose
                && last.in_class()
                && rest.iter().all(Token::in_class)
        }
        _ => false,
    }
}
