//! Back reference renumbering and deferred marker resolution.

use recompose_core::{Escape, GroupOpen, TokenKind, deferred_ref, lex, token_text};

use crate::{Error, Result};

/// Highest group number a back reference can name.
pub const MAX_BACK_REFERENCE: u32 = 99;

/// Shifts numeric back references by `offset` and steps deferred markers one level out.
///
/// A marker at depth zero becomes a reference to its local index, which must name a group
/// (`1` to `99`); later passes shift it like any other reference.
pub fn renumber_refs(source: &str, offset: u32) -> Result<String> {
    let mut out = String::with_capacity(source.len());
    for token in lex(source) {
        let text = token_text(source, &token);
        if token.in_class() {
            out.push_str(text);
            continue;
        }
        match token.kind {
            TokenKind::Escape(Escape::Backref(n)) => {
                let shifted = u32::from(n) + offset;
                if shifted > MAX_BACK_REFERENCE {
                    return Err(Error::TooManyBackReferences(shifted));
                }
                out.push('\\');
                out.push_str(&shifted.to_string());
            }
            TokenKind::GroupOpen(GroupOpen::Deferred { depth: 0, index }) => {
                if index == 0 {
                    return Err(Error::InvalidBackReference(index));
                }
                if index > MAX_BACK_REFERENCE {
                    return Err(Error::TooManyBackReferences(index));
                }
                out.push('\\');
                out.push_str(&index.to_string());
            }
            TokenKind::GroupOpen(GroupOpen::Deferred { depth, index }) => {
                out.push_str(&deferred_ref(index, depth - 1));
            }
            _ => out.push_str(text),
        }
    }
    Ok(out)
}
