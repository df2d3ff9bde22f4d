//! Argument trees handed to the assembler.

use std::fmt;

use crate::compose::Composer;
use crate::regex::Regex;
use crate::{Fragment, Result};

/// Builder invoked during assembly, with its own saved flag and direction state.
pub type Thunk = Box<dyn Fn(&mut Composer) -> Result<Arg>>;

pub enum Arg {
    Pattern(Regex),
    /// Plain text, escaped before use.
    Literal(String),
    /// Result of an earlier `assemble` or `decorate`.
    Fragment(Fragment),
    Deferred(Thunk),
    /// Nested sequence.
    Tree(Vec<Arg>),
}

impl Arg {
    pub fn deferred(f: impl Fn(&mut Composer) -> Result<Arg> + 'static) -> Self {
        Arg::Deferred(Box::new(f))
    }

    pub fn tree(items: impl IntoIterator<Item = Arg>) -> Self {
        Arg::Tree(items.into_iter().collect())
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Arg::Pattern(_) => "pattern",
            Arg::Literal(_) => "literal",
            Arg::Fragment(_) => "fragment",
            Arg::Deferred(_) => "deferred builder",
            Arg::Tree(_) => "tree",
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Pattern(regex) => f.debug_tuple("Pattern").field(regex).finish(),
            Arg::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Arg::Fragment(fragment) => f.debug_tuple("Fragment").field(fragment).finish(),
            Arg::Deferred(_) => f.write_str("Deferred(..)"),
            Arg::Tree(items) => f.debug_tuple("Tree").field(items).finish(),
        }
    }
}

impl From<Regex> for Arg {
    fn from(regex: Regex) -> Self {
        Arg::Pattern(regex)
    }
}

impl From<&Regex> for Arg {
    fn from(regex: &Regex) -> Self {
        Arg::Pattern(regex.clone())
    }
}

impl From<Fragment> for Arg {
    fn from(fragment: Fragment) -> Self {
        Arg::Fragment(fragment)
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Arg::Literal(text.to_owned())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Arg::Literal(text)
    }
}

impl From<char> for Arg {
    fn from(c: char) -> Self {
        Arg::Literal(c.to_string())
    }
}

macro_rules! literal_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Arg {
            fn from(n: $ty) -> Self {
                Arg::Literal(n.to_string())
            }
        })*
    };
}

literal_from_int!(i32, i64, u32, u64, usize);

impl From<Vec<Arg>> for Arg {
    fn from(items: Vec<Arg>) -> Self {
        Arg::Tree(items)
    }
}
