//! Wide-mode eligibility of narrow sources.
//!
//! Promotion to wide mode is only a rewrite for a few constructs (stray braces and
//! brackets, `.` and `[^]`). Everything that becomes an error or silently changes
//! meaning under the `u` flag is reported as a problem here.

use recompose_core::{ClassOpen, Escape, GroupOpen, Token, TokenKind, ident, lex, token_text};

/// Identity escapes legal in wide mode outside classes.
const PATTERN_IDENTITY: &str = r"^$\.*+?()[]{}|/fnrtvbB";
/// Identity escapes legal in wide mode inside classes.
const CLASS_IDENTITY: &str = r"^$\.*+?()[]{}|/fnrtvb-";

#[derive(Clone, Copy, PartialEq, Eq)]
enum ClassAtom {
    Shorthand,
    Other,
}

#[derive(Default)]
struct ClassState {
    at_start: bool,
    last: Option<ClassAtom>,
    range_start: Option<ClassAtom>,
}

impl ClassState {
    fn opened() -> Self {
        Self {
            at_start: true,
            ..Self::default()
        }
    }

    /// Feeds one class atom; `true` when a shorthand ends up on either side of a range.
    fn atom(&mut self, atom: ClassAtom) -> bool {
        self.at_start = false;
        match self.range_start.take() {
            Some(start) => {
                self.last = None;
                start == ClassAtom::Shorthand || atom == ClassAtom::Shorthand
            }
            None => {
                self.last = Some(atom);
                false
            }
        }
    }

    fn dash(&mut self) -> bool {
        self.at_start = false;
        match self.last.take() {
            Some(start) if self.range_start.is_none() => {
                self.range_start = Some(start);
                false
            }
            _ => self.atom(ClassAtom::Other),
        }
    }
}

/// Whether promoting `source` to wide mode would be illegal or change its meaning.
pub fn has_wide_problem(source: &str) -> bool {
    let mut open_groups: Vec<GroupOpen> = Vec::new();
    let mut after_lookahead = false;
    let mut class = ClassState::default();

    for token in lex(source) {
        if token.in_class() {
            if class_token_problem(&token, &mut class) {
                return true;
            }
            continue;
        }

        let closed_lookahead = std::mem::take(&mut after_lookahead);
        match token.kind {
            TokenKind::Escape(escape) => {
                if pattern_escape_problem(source, &token, escape) {
                    return true;
                }
            }
            TokenKind::GroupOpen(GroupOpen::Deferred { .. }) => {}
            TokenKind::GroupOpen(open) => open_groups.push(open),
            TokenKind::GroupClose => {
                after_lookahead = matches!(
                    open_groups.pop(),
                    Some(GroupOpen::Lookahead | GroupOpen::NegativeLookahead)
                );
            }
            TokenKind::ClassOpen(ClassOpen::Plain) => class = ClassState::opened(),
            kind if kind.is_quantifier() && closed_lookahead => return true,
            TokenKind::Garbage => return true,
            _ => {}
        }
    }
    false
}

fn pattern_escape_problem(source: &str, token: &Token, escape: Escape) -> bool {
    match escape {
        Escape::Char(c) => !PATTERN_IDENTITY.contains(c),
        Escape::Octal | Escape::Property | Escape::UnicodeBraced => true,
        Escape::NamedRef => {
            let text = token_text(source, token);
            let name = &text[3..text.len() - 1];
            !ident::is_group_name(name)
        }
        _ => false,
    }
}

fn class_token_problem(token: &Token, class: &mut ClassState) -> bool {
    match token.kind {
        TokenKind::ClassClose => false,
        TokenKind::Caret if class.at_start => {
            class.at_start = false;
            false
        }
        TokenKind::Dash => class.dash(),
        TokenKind::Escape(Escape::ClassShorthand(_)) => class.atom(ClassAtom::Shorthand),
        TokenKind::Escape(escape) => {
            let problem = match escape {
                Escape::Char(c) => !CLASS_IDENTITY.contains(c),
                Escape::Octal
                | Escape::Property
                | Escape::UnicodeBraced
                | Escape::Backref(_)
                | Escape::NamedRef => true,
                _ => false,
            };
            problem || class.atom(ClassAtom::Other)
        }
        TokenKind::Garbage => true,
        _ => class.atom(ClassAtom::Other),
    }
}
