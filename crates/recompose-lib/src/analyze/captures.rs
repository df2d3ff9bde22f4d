use recompose_core::{TokenKind, lex};

/// Counts capturing groups, named or not. Parentheses inside classes are literal.
pub fn count_captures(source: &str) -> u32 {
    let count = lex(source)
        .iter()
        .filter(|token| !token.in_class())
        .filter(|token| matches!(token.kind, TokenKind::GroupOpen(open) if open.is_capture()))
        .count();
    count as u32
}
