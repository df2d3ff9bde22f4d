//! Narrow to wide mode promotion.
//!
//! Only sources that passed [`crate::analyze::has_wide_problem`] may be promoted.

use recompose_core::{Brace, ClassOpen, TokenKind, lex, token_text};

/// Narrow `.`: any code unit but a line terminator. Astral characters, one unit pair
/// in narrow mode, are excluded rather than matched whole.
pub const WIDE_DOT: &str = r"[^\n\r\u2028\u2029\u{10000}-\u{10FFFF}]";

/// Narrow `[^]`: any code unit.
pub const WIDE_ANY_UNIT: &str = r"[\u0000-\uFFFF]";

/// Escapes stray braces and brackets and spells out `.` and `[^]` for wide mode.
pub fn promote_to_wide(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for token in lex(source) {
        let text = token_text(source, &token);
        if token.in_class() {
            out.push_str(text);
            continue;
        }
        out.push_str(match token.kind {
            TokenKind::BraceOpen(Brace::Literal) => r"\{",
            TokenKind::BraceClose => r"\}",
            TokenKind::ClassClose => r"\]",
            TokenKind::Dot => WIDE_DOT,
            TokenKind::ClassOpen(ClassOpen::EmptyNegated) => WIDE_ANY_UNIT,
            _ => text,
        });
    }
    log::trace!("promoted /{source}/ to /{out}/u");
    out
}
