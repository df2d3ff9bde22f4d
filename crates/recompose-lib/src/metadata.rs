//! Analysis results attached to fragments.
//!
//! A [`Metadata`] record is an owned field: native patterns carry it inside their shared
//! handle, composites carry it inline. It therefore lives exactly as long as its fragment.
//! Lazily computed properties are [`Memo`] cells, written at most once.

use std::fmt;
use std::sync::OnceLock;

/// A write-once cell. The first writer wins; later writes are ignored.
#[derive(Clone)]
pub struct Memo<T>(OnceLock<T>);

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self(OnceLock::new())
    }
}

impl<T> Memo<T> {
    pub fn new(value: T) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(value);
        Self(cell)
    }

    /// The stored value, if it was computed already.
    pub fn get(&self) -> Option<&T> {
        self.0.get()
    }

    pub(crate) fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(f)
    }

    pub(crate) fn set(&self, value: T) {
        let _ = self.0.set(value);
    }
}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.get() {
            Some(value) => value.fmt(f),
            None => f.write_str("?"),
        }
    }
}

/// Matching direction a fragment's back references were built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    /// No back references, or not tied to a direction.
    #[default]
    Neutral,
}

impl Direction {
    pub fn opposes(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Forward, Direction::Backward) | (Direction::Backward, Direction::Forward)
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Neutral => "neutral",
        })
    }
}

/// Whether a fragment refers back to groups, and whether its last token does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefSummary {
    pub has_refs: bool,
    /// A numeric reference or deferred marker ends the source. A digit appended
    /// directly after it would be read as part of the reference number.
    pub has_final_ref: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub(crate) capture_count: Memo<u32>,
    pub(crate) refs: Memo<RefSummary>,
    pub(crate) is_disjunction: Memo<bool>,
    pub(crate) is_single_atom: Memo<bool>,
    pub(crate) direction: Direction,
    pub(crate) wide: bool,
    /// `i` of the natives a composite was built from; `None` when it has none.
    pub(crate) ignore_case: Option<bool>,
    /// `m` of the natives a composite was built from.
    pub(crate) multiline: Option<bool>,
}

impl Metadata {
    /// Capturing groups, if counted already.
    pub fn capture_count(&self) -> Option<u32> {
        self.capture_count.get().copied()
    }

    pub fn refs(&self) -> Option<RefSummary> {
        self.refs.get().copied()
    }

    pub fn is_disjunction(&self) -> Option<bool> {
        self.is_disjunction.get().copied()
    }

    pub fn is_single_atom(&self) -> Option<bool> {
        self.is_single_atom.get().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_wide(&self) -> bool {
        self.wide
    }

    pub fn ignore_case(&self) -> Option<bool> {
        self.ignore_case
    }

    pub fn multiline(&self) -> Option<bool> {
        self.multiline
    }

    /// Record for a fragment whose source was wrapped or suffixed. Only the build context
    /// survives; every analyzed property is recomputed from the new source.
    pub(crate) fn decorated(&self) -> Metadata {
        Metadata {
            direction: self.direction,
            wide: self.wide,
            ignore_case: self.ignore_case,
            multiline: self.multiline,
            ..Metadata::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memo_first_writer_wins() {
        let memo = Memo::default();
        assert_eq!(memo.get(), None);
        memo.set(1);
        memo.set(2);
        assert_eq!(memo.get(), Some(&1));
        assert_eq!(*memo.get_or_init(|| 3), 1);
    }

    #[test]
    fn decorated_keeps_build_context() {
        let md = Metadata {
            capture_count: Memo::new(2),
            refs: Memo::new(RefSummary {
                has_refs: true,
                has_final_ref: true,
            }),
            is_disjunction: Memo::new(true),
            is_single_atom: Memo::new(false),
            direction: Direction::Backward,
            wide: true,
            ignore_case: Some(true),
            multiline: None,
        };
        let decorated = md.decorated();
        assert_eq!(decorated.capture_count(), None);
        assert_eq!(decorated.refs(), None);
        assert_eq!(decorated.is_disjunction(), None);
        assert_eq!(decorated.direction(), Direction::Backward);
        assert!(decorated.is_wide());
        assert_eq!(decorated.ignore_case(), Some(true));
        assert_eq!(decorated.multiline(), None);
    }

    #[test]
    fn opposing_directions() {
        assert!(Direction::Forward.opposes(Direction::Backward));
        assert!(!Direction::Forward.opposes(Direction::Neutral));
        assert!(!Direction::Backward.opposes(Direction::Backward));
    }
}
