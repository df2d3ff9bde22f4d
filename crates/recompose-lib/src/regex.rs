//! Native pattern handle.
//!
//! Compilation and matching are delegated to `regress`, an ECMAScript engine. The handle
//! owns the source, the flags and the [`Metadata`] record, so the record is dropped with
//! the last clone of the pattern.

use std::fmt;
use std::sync::Arc;

use recompose_core::Flags;

use crate::analyze;
use crate::metadata::{Direction, Metadata};
use crate::{Error, Result};

pub use regress::Match;

struct Inner {
    source: String,
    flags: Flags,
    compiled: regress::Regex,
    metadata: Metadata,
}

/// A compiled native pattern plus its analysis record. Cheap to clone.
#[derive(Clone)]
pub struct Regex {
    inner: Arc<Inner>,
}

impl Regex {
    pub fn new(source: &str) -> Result<Self> {
        Self::with_flags(source, "")
    }

    /// Compiles `source` with flag letters such as `"iu"`.
    pub fn with_flags(source: &str, flags: &str) -> Result<Self> {
        let flags = Flags::parse(flags)?;
        let metadata = Metadata {
            wide: flags.unicode,
            ..Metadata::default()
        };
        Self::from_parts(source.to_owned(), flags, metadata)
    }

    pub(crate) fn from_parts(source: String, flags: Flags, metadata: Metadata) -> Result<Self> {
        let host_flags = regress::Flags {
            icase: flags.ignore_case,
            multiline: flags.multiline,
            dot_all: flags.dot_all,
            unicode: flags.unicode,
            ..Default::default()
        };
        let compiled = regress::Regex::with_flags(&source, host_flags).map_err(|e| {
            Error::InvalidPattern {
                pattern: source.clone(),
                flags,
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            inner: Arc::new(Inner {
                source,
                flags,
                compiled,
                metadata,
            }),
        })
    }

    pub fn source(&self) -> &str {
        &self.inner.source
    }

    pub fn flags(&self) -> Flags {
        self.inner.flags
    }

    pub fn metadata(&self) -> &Metadata {
        &self.inner.metadata
    }

    pub fn capture_count(&self) -> u32 {
        analyze::capture_count(self.source(), self.metadata())
    }

    pub fn has_refs(&self) -> bool {
        analyze::refs(self.source(), self.metadata()).has_refs
    }

    pub fn is_disjunction(&self) -> bool {
        analyze::is_disjunction(self.source(), self.metadata())
    }

    pub fn direction(&self) -> Direction {
        self.inner.metadata.direction
    }

    pub fn is_wide(&self) -> bool {
        self.inner.metadata.wide
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.inner.compiled.find(text).is_some()
    }

    pub fn find(&self, text: &str) -> Option<Match> {
        self.inner.compiled.find(text)
    }

    /// Whether both handles share one compiled pattern.
    pub fn ptr_eq(&self, other: &Regex) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source() {
            "" => "(?:)",
            source => source,
        };
        write!(f, "/{}/{}", source, self.inner.flags)
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regex")
            .field("pattern", &self.to_string())
            .field("metadata", &self.inner.metadata)
            .finish()
    }
}

impl std::str::FromStr for Regex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Regex::new(s)
    }
}
