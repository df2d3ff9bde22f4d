use recompose_core::{Escape, GroupOpen, TokenKind, lex};

use crate::metadata::RefSummary;

/// Finds numeric back references and deferred markers outside classes.
pub fn scan_refs(source: &str) -> RefSummary {
    let mut summary = RefSummary::default();
    for token in lex(source) {
        if token.in_class() || !is_numeric_ref(token.kind) {
            continue;
        }
        summary.has_refs = true;
        if token.span.end == source.len() {
            summary.has_final_ref = true;
        }
    }
    summary
}

pub(crate) fn is_numeric_ref(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Escape(Escape::Backref(_)) | TokenKind::GroupOpen(GroupOpen::Deferred { .. })
    )
}
