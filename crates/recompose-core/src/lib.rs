#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Source-text building blocks for composing ECMAScript patterns.
//!
//! - [`lexer`]: context-aware tokens over pattern source, the scanner every analysis uses
//! - [`flags`]: the flag set of a native pattern
//! - [`marker`]: deferred back reference markers
//! - [`ident`]: group name validity under wide-mode rules

pub mod flags;
pub mod ident;
pub mod lexer;
pub mod marker;


pub use flags::{Flags, FlagsError};
pub use lexer::{Brace, ClassOpen, Context, Escape, GroupOpen, Token, TokenKind, lex, token_text};
pub use marker::deferred_ref;
