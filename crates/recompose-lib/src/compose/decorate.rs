//! Groups, assertions and quantifiers around an assembled fragment.

use crate::fragment::Fragment;
use crate::metadata::Metadata;
use crate::Result;

use super::Composer;

/// When a [`Wrap`] adds its delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapWhen {
    Always,
    /// Only if a suffix quantifier would otherwise bind to part of the fragment.
    ForQuantifier,
    /// Only around a top-level alternation.
    Disjunction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrap {
    pub when: WrapWhen,
    pub open: String,
    pub close: String,
    pub suffix: Option<String>,
}

impl Wrap {
    /// Unconditional delimiters, e.g. `(` and `)` for a capture or `(?=` and `)`.
    pub fn always(open: &str, close: &str) -> Self {
        Self {
            when: WrapWhen::Always,
            open: open.to_owned(),
            close: close.to_owned(),
            suffix: None,
        }
    }

    /// `(?:...)` as needed, followed by `quantifier`.
    pub fn quantifier(quantifier: &str) -> Self {
        Self {
            when: WrapWhen::ForQuantifier,
            open: "(?:".to_owned(),
            close: ")".to_owned(),
            suffix: Some(quantifier.to_owned()),
        }
    }

    /// `(?:...)` around a top-level alternation only.
    pub fn disjunction() -> Self {
        Self {
            when: WrapWhen::Disjunction,
            open: "(?:".to_owned(),
            close: ")".to_owned(),
            suffix: None,
        }
    }
}

impl Composer {
    /// Applies `wrap` to `fragment`. Quantifying something that cannot repeat fails.
    pub fn decorate(&self, fragment: Fragment, wrap: &Wrap) -> Result<Fragment> {
        let wide = self.state.flags.wide || fragment.is_wide();
        let wrapped = match wrap.when {
            WrapWhen::Always => true,
            WrapWhen::ForQuantifier => fragment.needs_wrapping_for_quantifier(wide)?,
            WrapWhen::Disjunction => fragment.is_disjunction(),
        };
        if !wrapped && wrap.suffix.is_none() {
            return Ok(fragment);
        }

        let mut source = String::with_capacity(fragment.source().len() + 8);
        if wrapped {
            source.push_str(&wrap.open);
            source.push_str(fragment.source());
            source.push_str(&wrap.close);
        } else {
            source.push_str(fragment.source());
        }
        if let Some(suffix) = &wrap.suffix {
            source.push_str(suffix);
        }

        let metadata = match fragment.metadata() {
            Some(metadata) => metadata.decorated(),
            None => Metadata {
                wide: self.state.flags.wide,
                ..Metadata::default()
            },
        };
        Ok(Fragment::composite(source, metadata))
    }
}
