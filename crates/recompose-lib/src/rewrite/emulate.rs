//! Flag emulation for natives merged into a flagless composite.
//!
//! `s` is spelled out as `[^]`. `m` is folded into explicit line-boundary assertions, so
//! fragments with and without `m` can share one pattern.

use recompose_core::{TokenKind, lex, token_text};

pub const FOLDED_START: &str = r"(?:^|(?<=[\n\r\u2028\u2029]))";
pub const FOLDED_END: &str = r"(?:$|(?=[\n\r\u2028\u2029]))";

/// Rewrites `.` when `dot_all` and `^`/`$` when `fold_multiline`, outside classes.
/// Anchors that are already folded are kept as they are.
pub fn emulate_flags(source: &str, dot_all: bool, fold_multiline: bool) -> String {
    if !dot_all && !fold_multiline {
        return source.to_owned();
    }
    let mut out = String::with_capacity(source.len());
    let mut copied_to = 0;
    for token in lex(source) {
        if token.span.start < copied_to {
            continue;
        }
        let text = token_text(source, &token);
        if token.in_class() {
            out.push_str(text);
            continue;
        }
        if fold_multiline {
            let rest = &source[token.span.start..];
            if let Some(folded) = [FOLDED_START, FOLDED_END]
                .into_iter()
                .find(|folded| rest.starts_with(folded))
            {
                out.push_str(folded);
                copied_to = token.span.start + folded.len();
                continue;
            }
        }
        out.push_str(match token.kind {
            TokenKind::Dot if dot_all => "[^]",
            TokenKind::Caret if fold_multiline => FOLDED_START,
            TokenKind::Dollar if fold_multiline => FOLDED_END,
            _ => text,
        });
    }
    out
}
