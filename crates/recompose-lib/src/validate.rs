//! Flag and direction agreement across the natives of one assembly.

use recompose_core::Flags;

use crate::metadata::Direction;
use crate::regex::Regex;
use crate::{Error, Result};

/// Merged flag state of every native seen so far.
///
/// `ignore_case` and `multiline` start unset and are fixed by the first native; every
/// later native must agree. `wide` is sticky: one wide native makes the whole result wide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagValidator {
    pub ignore_case: Option<bool>,
    pub multiline: Option<bool>,
    pub wide: bool,
}

impl FlagValidator {
    /// Records the flags of `regex`. With `fold_multiline`, `m` is emulated instead of
    /// merged, so it may differ between natives.
    pub fn check(&mut self, regex: &Regex, fold_multiline: bool) -> Result<()> {
        let flags = regex.flags();
        self.check_flags(
            Some(flags.ignore_case),
            Some(flags.multiline),
            flags.unicode,
            fold_multiline,
            || regex.to_string(),
        )
    }

    /// Records flags inherited from an earlier assembly. `None` means the fragment was
    /// built without natives and places no constraint. `shown` renders the offender.
    pub fn check_flags(
        &mut self,
        ignore_case: Option<bool>,
        multiline: Option<bool>,
        wide: bool,
        fold_multiline: bool,
        shown: impl FnOnce() -> String,
    ) -> Result<()> {
        if let Some(i) = ignore_case {
            if self.ignore_case.is_some_and(|seen| seen != i) {
                return Err(Error::CaseMismatch(shown()));
            }
            self.ignore_case = Some(i);
        }
        if let Some(m) = multiline {
            if !fold_multiline && self.multiline.is_some_and(|seen| seen != m) {
                return Err(Error::MultilineMismatch(shown()));
            }
            self.multiline = Some(m);
        }
        self.wide |= wide;
        Ok(())
    }

    /// Flags for the assembled result: `i`, `m` unless folded, `u`.
    pub fn merged(&self, fold_multiline: bool) -> Flags {
        Flags {
            ignore_case: self.ignore_case == Some(true),
            multiline: !fold_multiline && self.multiline == Some(true),
            unicode: self.wide,
            ..Flags::NONE
        }
    }
}

/// Rejects a native whose back references run against the direction being built.
///
/// Returns whether the native carries a direction, which counts as having references.
pub fn check_direction(regex: &Regex, building: Direction) -> Result<bool> {
    let found = regex.direction();
    if found.opposes(building) {
        return Err(Error::DirectionMismatch {
            found,
            building,
            pattern: regex.source().to_owned(),
        });
    }
    Ok(found != Direction::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn re(source: &str, flags: &str) -> Regex {
        Regex::with_flags(source, flags).unwrap()
    }

    #[test]
    fn case_must_agree() {
        let mut validator = FlagValidator::default();
        validator.check(&re("a", "i"), true).unwrap();
        validator.check(&re("b", "i"), true).unwrap();
        let err = validator.check(&re("c", ""), true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.to_string(), "can't combine i and non-i patterns: /c/");
    }

    #[test]
    fn multiline_only_checked_without_folding() {
        let mut folded = FlagValidator::default();
        folded.check(&re("^a", "m"), true).unwrap();
        folded.check(&re("b", ""), true).unwrap();
        assert_eq!(folded.merged(true).to_string(), "");

        let mut strict = FlagValidator::default();
        strict.check(&re("^a", "m"), false).unwrap();
        let err = strict.check(&re("b", ""), false).unwrap_err();
        assert!(matches!(err, Error::MultilineMismatch(_)));
    }

    #[test]
    fn inherited_flags_are_checked_like_natives() {
        let mut validator = FlagValidator::default();
        validator
            .check_flags(None, None, false, true, || unreachable!())
            .unwrap();
        assert_eq!(validator, FlagValidator::default());

        validator
            .check_flags(Some(true), Some(false), false, true, String::new)
            .unwrap();
        let err = validator.check(&re("b", ""), true).unwrap_err();
        assert!(matches!(err, Error::CaseMismatch(_)));

        let err = validator
            .check_flags(Some(false), None, false, true, || "/x/".to_owned())
            .unwrap_err();
        assert_eq!(err.to_string(), "can't combine i and non-i patterns: /x/");
    }

    #[test]
    fn wide_is_sticky() {
        let mut validator = FlagValidator::default();
        validator.check(&re("a", "u"), true).unwrap();
        validator.check(&re("b", ""), true).unwrap();
        assert!(validator.wide);
        assert_eq!(validator.merged(true).to_string(), "u");
    }
}
