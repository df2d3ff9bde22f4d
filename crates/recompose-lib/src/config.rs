//! Configuration types for composition.

use recompose_core::Flags;

use crate::metadata::Direction;

/// Engine-wide settings, owned by a [`crate::Composer`].
#[derive(Clone, Debug)]
pub struct Config {
    /// Emulate `m` with lookaround instead of requiring all natives to agree on it.
    pub(crate) fold_multiline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fold_multiline: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `^`/`$` of multiline natives are rewritten into explicit line-boundary
    /// assertions. When off, `m` is validated like `i` and emitted on the result.
    pub fn fold_multiline(mut self, value: bool) -> Self {
        self.fold_multiline = value;
        self
    }
}

/// How caller flags combine with the merged flags of the natives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagOp {
    Add,
    Remove,
}

impl FlagOp {
    pub fn apply(self, merged: Flags, flags: Flags) -> Flags {
        match self {
            FlagOp::Add => merged.union(flags),
            FlagOp::Remove => merged.difference(flags),
        }
    }
}

/// Options for [`crate::Composer::finalize`].
#[derive(Clone, Debug, Default)]
pub struct FinalizeOptions {
    pub(crate) flags: Option<(FlagOp, Flags)>,
    pub(crate) direction: Option<Direction>,
}

impl FinalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add flags on top of the merged ones, e.g. `g` or a forced `i`/`u`.
    pub fn add_flags(mut self, flags: Flags) -> Self {
        self.flags = Some((FlagOp::Add, flags));
        self
    }

    /// Drop flags from the merged ones.
    pub fn remove_flags(mut self, flags: Flags) -> Self {
        self.flags = Some((FlagOp::Remove, flags));
        self
    }

    /// Record `direction` on the result instead of the one the assembly computed.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }
}
