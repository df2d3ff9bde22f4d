//! Fragments: pattern source text tagged with where it came from.

use crate::metadata::Metadata;
use crate::regex::Regex;

#[derive(Debug, Clone)]
pub enum FragmentKind {
    /// Source of a native pattern, possibly rewritten. Analysis is memoized on the pattern.
    Native(Regex),
    /// An escaped string or number.
    Literal,
    /// Output of a previous assembly or decoration.
    Composite(Metadata),
}

/// Immutable unit of pattern source. Rewrites derive new fragments.
#[derive(Debug, Clone)]
pub struct Fragment {
    source: String,
    kind: FragmentKind,
}

impl Fragment {
    pub fn native(regex: Regex) -> Self {
        Self {
            source: regex.source().to_owned(),
            kind: FragmentKind::Native(regex),
        }
    }

    /// Already escaped source.
    pub(crate) fn literal(source: String) -> Self {
        Self {
            source,
            kind: FragmentKind::Literal,
        }
    }

    pub(crate) fn composite(source: String, metadata: Metadata) -> Self {
        Self {
            source,
            kind: FragmentKind::Composite(metadata),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> &FragmentKind {
        &self.kind
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, FragmentKind::Literal)
    }

    /// `None` for literals, which are never analyzed.
    pub fn metadata(&self) -> Option<&Metadata> {
        match &self.kind {
            FragmentKind::Native(regex) => Some(regex.metadata()),
            FragmentKind::Literal => None,
            FragmentKind::Composite(metadata) => Some(metadata),
        }
    }

    /// Whether the fragment was built in wide mode.
    pub fn is_wide(&self) -> bool {
        self.metadata().is_some_and(Metadata::is_wide)
    }

    /// Same kind and metadata, new source. Only for rewrites that keep group structure.
    pub(crate) fn with_source(&self, source: String) -> Self {
        Self {
            source,
            kind: self.kind.clone(),
        }
    }

    pub(crate) fn into_source(self) -> String {
        self.source
    }
}
