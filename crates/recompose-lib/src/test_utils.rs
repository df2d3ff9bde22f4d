//! Thin combinators over `assemble`/`decorate`/`finalize`, shaped like the public layer
//! that drives the engine.

use recompose_core::deferred_ref;

use crate::{Arg, Composer, Direction, FinalizeOptions, Regex, Result, Wrap};

pub fn re(source: &str) -> Regex {
    Regex::new(source).unwrap()
}

pub fn re_flags(source: &str, flags: &str) -> Regex {
    Regex::with_flags(source, flags).unwrap()
}

pub fn sequence(c: &mut Composer, items: Vec<Arg>) -> Result<Regex> {
    c.scope(|c| {
        let fragment = c.assemble(&items, false, false, 0)?;
        c.finalize(fragment, &FinalizeOptions::default())
    })
}

pub fn either(c: &mut Composer, items: Vec<Arg>) -> Result<Regex> {
    c.scope(|c| {
        let fragment = c.assemble(&items, true, false, 0)?;
        c.finalize(fragment, &FinalizeOptions::default())
    })
}

pub fn capture(c: &mut Composer, items: Vec<Arg>) -> Result<Regex> {
    c.scope(|c| {
        let fragment = c.assemble(&items, false, false, 1)?;
        let fragment = c.decorate(fragment, &Wrap::always("(", ")"))?;
        c.finalize(fragment, &FinalizeOptions::default())
    })
}

pub fn suffix(c: &mut Composer, quantifier: &str, items: Vec<Arg>) -> Result<Regex> {
    c.scope(|c| {
        let fragment = c.assemble(&items, false, true, 0)?;
        let fragment = c.decorate(fragment, &Wrap::quantifier(quantifier))?;
        c.finalize(fragment, &FinalizeOptions::default())
    })
}

pub fn look_ahead(c: &mut Composer, items: Vec<Arg>) -> Result<Regex> {
    c.scope(|c| {
        let fragment = c.assemble(&items, false, false, 0)?;
        let fragment = c.decorate(fragment, &Wrap::always("(?=", ")"))?;
        c.finalize(fragment, &FinalizeOptions::default())
    })
}

/// Built backward, published as neutral so it can sit in forward patterns.
pub fn look_behind(c: &mut Composer, items: Vec<Arg>) -> Result<Regex> {
    c.with_direction(Direction::Backward, |c| {
        c.scope(|c| {
            let fragment = c.assemble(&items, false, false, 0)?;
            let fragment = c.decorate(fragment, &Wrap::always("(?<=", ")"))?;
            c.finalize(
                fragment,
                &FinalizeOptions::default().direction(Direction::Neutral),
            )
        })
    })
}

/// Deferred reference to local group `index`, resolved `depth` assemblies out.
pub fn ref_to(index: u32, depth: u32) -> Arg {
    Arg::deferred(move |_| Ok(Regex::new(&deferred_ref(index, depth))?.into()))
}

/// `/source/flags`, then the analysis a composite carries.
pub fn describe(regex: &Regex) -> String {
    format!(
        "{}\ncaptures: {}\nrefs: {}\ndirection: {}\nwide: {}",
        regex,
        regex.capture_count(),
        regex.has_refs(),
        regex.direction(),
        regex.is_wide()
    )
}
