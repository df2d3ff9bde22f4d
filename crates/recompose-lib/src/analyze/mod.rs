//! Static analysis of pattern source.
//!
//! Every analyzer is a pure function of the source text. The wrappers here memoize the
//! answers in the owning fragment's [`Metadata`], so each property is computed at most
//! once per fragment.

pub mod captures;
pub mod refs;
pub mod structure;
pub mod wide;

#[cfg(test)]
mod analyze_tests;

pub use captures::count_captures;
pub use refs::scan_refs;
pub use wide::has_wide_problem;

use crate::fragment::Fragment;
use crate::metadata::{Metadata, RefSummary};
use crate::Result;

pub fn capture_count(source: &str, metadata: &Metadata) -> u32 {
    *metadata
        .capture_count
        .get_or_init(|| count_captures(source))
}

pub fn refs(source: &str, metadata: &Metadata) -> RefSummary {
    *metadata.refs.get_or_init(|| scan_refs(source))
}

pub fn is_disjunction(source: &str, metadata: &Metadata) -> bool {
    *metadata
        .is_disjunction
        .get_or_init(|| structure::is_disjunction(source))
}

pub fn is_single_atom(source: &str, metadata: &Metadata) -> bool {
    *metadata
        .is_single_atom
        .get_or_init(|| structure::is_single_atom(source))
}

impl Fragment {
    pub fn capture_count(&self) -> u32 {
        self.metadata()
            .map_or(0, |md| capture_count(self.source(), md))
    }

    pub fn refs(&self) -> RefSummary {
        self.metadata()
            .map(|md| refs(self.source(), md))
            .unwrap_or_default()
    }

    /// Literals are escaped, so they never alternate.
    pub fn is_disjunction(&self) -> bool {
        self.metadata()
            .is_some_and(|md| is_disjunction(self.source(), md))
    }

    pub fn is_single_atom(&self) -> bool {
        match self.metadata() {
            Some(md) => is_single_atom(self.source(), md),
            None => structure::is_single_atom(self.source()),
        }
    }

    /// Memoized form of [`structure::needs_wrapping_for_quantifier`].
    pub fn needs_wrapping_for_quantifier(&self, wide: bool) -> Result<bool> {
        structure::needs_wrapping_for_quantifier(self.source(), wide, || self.is_single_atom())
    }
}
