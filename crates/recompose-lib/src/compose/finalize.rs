use crate::config::FinalizeOptions;
use crate::fragment::Fragment;
use crate::metadata::Metadata;
use crate::regex::Regex;
use crate::Result;

use super::Composer;
use super::assemble::promote;

impl Composer {
    /// Compiles `fragment` with the merged flags, adjusted by `options`.
    ///
    /// Forcing `u` onto a narrow result promotes it first, which fails like any other
    /// promotion. The result records the fragment's analysis, its wide flag and either
    /// the computed or the requested direction.
    pub fn finalize(&mut self, fragment: Fragment, options: &FinalizeOptions) -> Result<Regex> {
        let merged = self.state.flags.merged(self.config.fold_multiline);
        let flags = match options.flags {
            Some((op, extra)) => op.apply(merged, extra),
            None => merged,
        };

        let mut fragment = fragment;
        if flags.unicode && !self.state.flags.wide && !fragment.is_wide() {
            fragment = promote(fragment)?;
        }

        let base = fragment.metadata().cloned().unwrap_or_default();
        let metadata = Metadata {
            direction: options.direction.unwrap_or(base.direction),
            wide: flags.unicode,
            ..base
        };

        let regex = Regex::from_parts(fragment.source().to_owned(), flags, metadata)?;
        log::debug!("finalized {regex}");
        Ok(regex)
    }
}
