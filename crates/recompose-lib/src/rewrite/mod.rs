//! Source rewriters. Each returns new source text and leaves its input untouched.

pub mod emulate;
pub mod promote;
pub mod renumber;

#[cfg(test)]
mod rewrite_tests;

pub use emulate::emulate_flags;
pub use promote::promote_to_wide;
pub use renumber::renumber_refs;
