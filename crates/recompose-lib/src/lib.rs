#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Recompose: build large ECMAScript patterns from smaller, already valid ones.
//!
//! The engine keeps composites correct: capture groups are renumbered, flags must agree,
//! disjunctions get wrapped where precedence requires it, and narrow fragments are promoted
//! when any part of the result needs wide (`u`) mode.
//!
//! # Example
//!
//! ```
//! use recompose_lib::{Arg, Composer, FinalizeOptions, Regex};
//!
//! let word = Regex::new(r"(\w+)\1").unwrap();
//! let mut composer = Composer::default();
//! let fragment = composer
//!     .assemble(&[word.clone().into(), Arg::from("-"), word.into()], false, false, 0)
//!     .unwrap();
//! let regex = composer.finalize(fragment, &FinalizeOptions::default()).unwrap();
//! assert_eq!(regex.source(), r"(\w+)\1-(\w+)\2");
//! assert_eq!(regex.capture_count(), 2);
//! ```

pub mod analyze;
pub mod arg;
pub mod compose;
pub mod config;
pub mod fragment;
pub mod metadata;
pub mod regex;
pub mod rewrite;
pub mod validate;

#[cfg(test)]
pub mod test_utils;

pub use arg::Arg;
pub use compose::{Composer, Wrap, WrapWhen};
pub use config::{Config, FinalizeOptions, FlagOp};
pub use fragment::{Fragment, FragmentKind};
pub use metadata::{Direction, Metadata};
pub use recompose_core::{Flags, FlagsError, deferred_ref};
pub use regex::Regex;

/// Error classes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or unpromotable source, or quantifying nothing or an assertion.
    Syntax,
    /// Incompatible flags or direction, or an argument that cannot be composed.
    Type,
    /// Back reference numbering overflow.
    Range,
}

/// Errors that can occur while composing patterns.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("nothing to repeat: /{0}/")]
    NothingToRepeat(String),

    #[error("can't upgrade the pattern to unicode: /{0}/")]
    WidePromotion(String),

    /// The host engine rejected the source.
    #[error("invalid pattern /{pattern}/{flags}: {message}")]
    InvalidPattern {
        pattern: String,
        flags: Flags,
        message: String,
    },

    #[error("can't combine i and non-i patterns: {0}")]
    CaseMismatch(String),

    #[error("can't combine m and non-m patterns: {0}")]
    MultilineMismatch(String),

    #[error("illegal {found} pattern argument while building a {building} one: /{pattern}/")]
    DirectionMismatch {
        found: Direction,
        building: Direction,
        pattern: String,
    },

    #[error(transparent)]
    Flags(#[from] FlagsError),

    #[error("can't compose {0} as a pattern")]
    UnsupportedArgument(&'static str),

    #[error("too many back references: \\{0}")]
    TooManyBackReferences(u32),

    /// A deferred reference resolved to group zero.
    #[error("invalid back reference: \\{0}")]
    InvalidBackReference(u32),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NothingToRepeat(_) | Error::WidePromotion(_) | Error::InvalidPattern { .. } => {
                ErrorKind::Syntax
            }
            Error::CaseMismatch(_)
            | Error::MultilineMismatch(_)
            | Error::DirectionMismatch { .. }
            | Error::Flags(_)
            | Error::UnsupportedArgument(_) => ErrorKind::Type,
            Error::TooManyBackReferences(_) | Error::InvalidBackReference(_) => ErrorKind::Range,
        }
    }
}

/// Result type for composition operations.
pub type Result<T> = std::result::Result<T, Error>;
