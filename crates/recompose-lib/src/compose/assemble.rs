//! Turning an argument tree into one composite fragment.
//!
//! Order matters. Every item is resolved and validated first, so the flag state is
//! complete before any rewrite looks at it. Then flags are fixed, disjunctions wrapped,
//! references renumbered left to right, and the sources joined right to left.

use crate::analyze::has_wide_problem;
use crate::arg::Arg;
use crate::fragment::{Fragment, FragmentKind};
use crate::metadata::{Direction, Memo, Metadata, RefSummary};
use crate::regex::Regex;
use crate::rewrite::{emulate_flags, promote_to_wide, renumber_refs};
use crate::validate::check_direction;
use crate::{Error, Result};

use super::Composer;

/// Characters escaped in literal arguments.
const META_CHARACTERS: &[char] = &[
    '.', '?', '*', '+', '^', '$', '[', ']', '\\', '(', ')', '{', '}', '|',
];

pub(crate) fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if META_CHARACTERS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl Composer {
    /// Assembles `items` into one fragment.
    ///
    /// - `alternation`: join with `|` instead of concatenating.
    /// - `needs_wrapping`: the caller embeds the result where a top-level disjunction
    ///   would leak, so sequence members that alternate get `(?:...)`.
    /// - `capture_offset`: groups the caller places before the result, e.g. `1` for the
    ///   body of a capturing group. Back references are shifted past them.
    ///
    /// Outside [`Composer::scope`] and [`Composer::reentrant`] every call starts from fresh
    /// flags. Inside them the flags accumulate until the scope ends.
    pub fn assemble(
        &mut self,
        items: &[Arg],
        alternation: bool,
        needs_wrapping: bool,
        capture_offset: u32,
    ) -> Result<Fragment> {
        if self.saved.is_empty() {
            self.reset();
        }
        self.assemble_items(items, alternation, needs_wrapping, capture_offset)
    }

    fn assemble_items(
        &mut self,
        items: &[Arg],
        alternation: bool,
        needs_wrapping: bool,
        capture_offset: u32,
    ) -> Result<Fragment> {
        let wrap = needs_wrapping || items.len() > 1;
        let mut has_refs = false;

        let mut fragments = Vec::with_capacity(items.len());
        for item in items {
            fragments.push(self.resolve(item, wrap, &mut has_refs)?);
        }

        let mut fragments = fragments
            .into_iter()
            .map(|fragment| self.fix_flags(fragment))
            .collect::<Result<Vec<_>>>()?;

        if !alternation && wrap {
            for fragment in &mut fragments {
                if !fragment.is_literal() && fragment.is_disjunction() {
                    *fragment = wrap_group(fragment);
                }
            }
        }

        let mut count = capture_offset;
        for fragment in &mut fragments {
            if fragment.is_literal() {
                continue;
            }
            if fragment.refs().has_refs {
                has_refs = true;
                let source = renumber_refs(fragment.source(), count)?;
                *fragment = fragment.with_source(source);
            }
            count += fragment.capture_count();
        }

        let has_final_ref = fragments
            .iter()
            .rev()
            .find(|fragment| !fragment.source().is_empty())
            .is_some_and(|fragment| !fragment.is_literal() && fragment.refs().has_final_ref);

        let is_disjunction = Memo::default();
        if alternation && fragments.len() > 1 {
            is_disjunction.set(true);
        }

        let metadata = Metadata {
            capture_count: Memo::new(count - capture_offset),
            refs: Memo::new(RefSummary {
                has_refs,
                has_final_ref,
            }),
            is_disjunction,
            is_single_atom: Memo::default(),
            direction: if has_refs {
                self.state.direction
            } else {
                Direction::Neutral
            },
            wide: self.state.flags.wide,
            ignore_case: self.state.flags.ignore_case,
            multiline: self.state.flags.multiline,
        };

        let source = join(&fragments, alternation);
        log::debug!(
            "assembled {} item(s) into /{}/ ({} group(s), refs: {})",
            items.len(),
            source,
            count - capture_offset,
            has_refs
        );
        Ok(Fragment::composite(source, metadata))
    }

    /// Validates one item and turns it into a fragment.
    fn resolve(&mut self, item: &Arg, wrap: bool, has_refs: &mut bool) -> Result<Fragment> {
        match item {
            Arg::Pattern(regex) => {
                self.check_native(regex, has_refs)?;
                Ok(Fragment::native(regex.clone()))
            }
            Arg::Literal(text) => Ok(Fragment::literal(escape_literal(text))),
            Arg::Fragment(fragment) => {
                match fragment.kind() {
                    FragmentKind::Native(regex) => self.check_native(regex, has_refs)?,
                    FragmentKind::Composite(metadata) => {
                        self.check_composite(fragment.source(), metadata, has_refs)?
                    }
                    FragmentKind::Literal => {}
                }
                Ok(fragment.clone())
            }
            Arg::Tree(children) => self.assemble_items(children, false, wrap, 0),
            Arg::Deferred(thunk) => {
                let resolved = self.reentrant(|composer| thunk(composer))?;
                if let Arg::Deferred(_) = resolved {
                    return Err(Error::UnsupportedArgument(resolved.type_name()));
                }
                self.resolve(&resolved, wrap, has_refs)
            }
        }
    }

    fn check_native(&mut self, regex: &Regex, has_refs: &mut bool) -> Result<()> {
        self.state
            .flags
            .check(regex, self.config.fold_multiline)?;
        if check_direction(regex, self.state.direction)? {
            *has_refs = true;
        }
        Ok(())
    }

    fn check_composite(
        &mut self,
        source: &str,
        metadata: &Metadata,
        has_refs: &mut bool,
    ) -> Result<()> {
        let found = metadata.direction;
        if found.opposes(self.state.direction) {
            return Err(Error::DirectionMismatch {
                found,
                building: self.state.direction,
                pattern: source.to_owned(),
            });
        }
        if found != Direction::Neutral {
            *has_refs = true;
        }
        self.state.flags.check_flags(
            metadata.ignore_case,
            metadata.multiline,
            metadata.wide,
            self.config.fold_multiline,
            || format!("/{source}/"),
        )
    }

    /// Emulates `s` and folded `m` of natives, then promotes narrow fragments when the
    /// result is wide.
    fn fix_flags(&self, fragment: Fragment) -> Result<Fragment> {
        let mut fragment = fragment;
        if let FragmentKind::Native(regex) = fragment.kind() {
            let flags = regex.flags();
            let fold = self.config.fold_multiline && flags.multiline;
            if flags.dot_all || fold {
                let source = emulate_flags(fragment.source(), flags.dot_all, fold);
                fragment = fragment.with_source(source);
            }
        }
        if self.state.flags.wide && !fragment.is_literal() && !fragment.is_wide() {
            fragment = promote(fragment)?;
        }
        Ok(fragment)
    }
}

pub(crate) fn promote(fragment: Fragment) -> Result<Fragment> {
    if has_wide_problem(fragment.source()) {
        return Err(Error::WidePromotion(fragment.into_source()));
    }
    let source = promote_to_wide(fragment.source());
    Ok(fragment.with_source(source))
}

fn wrap_group(fragment: &Fragment) -> Fragment {
    let metadata = fragment
        .metadata()
        .map(Metadata::decorated)
        .unwrap_or_default();
    Fragment::composite(format!("(?:{})", fragment.source()), metadata)
}

/// Joins sources right to left. In sequences, `(?:)` keeps a digit from extending a
/// trailing back reference.
fn join(fragments: &[Fragment], alternation: bool) -> String {
    let mut tail: Option<String> = None;
    for fragment in fragments.iter().rev() {
        let head = fragment.source();
        tail = Some(match tail {
            None => head.to_owned(),
            Some(tail) if alternation => format!("{head}|{tail}"),
            Some(tail) => {
                let glued = !fragment.is_literal()
                    && fragment.refs().has_final_ref
                    && tail.starts_with(|c: char| c.is_ascii_digit());
                let separator = if glued { "(?:)" } else { "" };
                format!("{head}{separator}{tail}")
            }
        });
    }
    tail.unwrap_or_default()
}
