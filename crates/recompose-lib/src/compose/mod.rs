//! The composition engine.
//!
//! A [`Composer`] is the context threaded through one top-level composition: it holds the
//! configuration, the flag validator and the direction being built. Anything that can
//! recurse into caller code (deferred builders, nested combinators) runs inside
//! [`Composer::reentrant`] or [`Composer::scope`], which restore the state afterwards.

mod assemble;
mod decorate;
mod finalize;


pub use decorate::{Wrap, WrapWhen};

use crate::config::Config;
use crate::metadata::Direction;
use crate::validate::FlagValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    flags: FlagValidator,
    direction: Direction,
}

impl Default for State {
    fn default() -> Self {
        Self {
            flags: FlagValidator::default(),
            direction: Direction::Forward,
        }
    }
}

/// Composition context.
///
/// A bare [`Composer::assemble`] call starts from fresh flags, so independent calls never
/// constrain each other. A combinator that assembles, decorates and finalizes should run in
/// [`Composer::scope`], which keeps the flag state of its assembly for `finalize` and
/// restores the caller's state afterwards.
#[derive(Debug, Default)]
pub struct Composer {
    config: Config,
    state: State,
    saved: Vec<State>,
}

impl Composer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: State::default(),
            saved: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn flags(&self) -> FlagValidator {
        self.state.flags
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// Forgets the flags seen so far. The direction is kept.
    pub fn reset(&mut self) {
        self.state.flags = FlagValidator::default();
    }

    /// Runs `f` and restores flag and direction state afterwards, even when `f` fails.
    pub fn reentrant<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.saved.push(self.state);
        let result = f(self);
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
        result
    }

    /// Like [`Composer::reentrant`], starting from fresh flags: one combinator call.
    pub fn scope<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.reentrant(|composer| {
            composer.reset();
            f(composer)
        })
    }

    /// Runs `f` while building in `direction`, as lookbehind bodies do.
    pub fn with_direction<T>(&mut self, direction: Direction, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = std::mem::replace(&mut self.state.direction, direction);
        let result = f(self);
        self.state.direction = previous;
        result
    }
}
