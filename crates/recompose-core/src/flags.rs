//! ECMAScript pattern flags.

use std::fmt;
use std::str::FromStr;

/// Errors from parsing a flag string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagsError {
    #[error("unknown flags: {0}")]
    Unknown(String),

    #[error("duplicate flags: {0}")]
    Duplicate(String),
}

/// A set of pattern flags, rendered in canonical `dgimsuy` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    pub has_indices: bool,
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
    pub dot_all: bool,
    pub unicode: bool,
    pub sticky: bool,
}

const LETTERS: [char; 7] = ['d', 'g', 'i', 'm', 's', 'u', 'y'];

impl Flags {
    pub const NONE: Flags = Flags {
        has_indices: false,
        global: false,
        ignore_case: false,
        multiline: false,
        dot_all: false,
        unicode: false,
        sticky: false,
    };

    pub fn parse(text: &str) -> Result<Self, FlagsError> {
        let mut flags = Flags::NONE;
        let mut unknown = String::new();
        let mut duplicate = String::new();
        for c in text.chars() {
            match flags.slot(c) {
                Some(slot) if *slot => duplicate.push(c),
                Some(slot) => *slot = true,
                None => unknown.push(c),
            }
        }
        if !unknown.is_empty() {
            return Err(FlagsError::Unknown(unknown));
        }
        if !duplicate.is_empty() {
            return Err(FlagsError::Duplicate(duplicate));
        }
        Ok(flags)
    }

    fn slot(&mut self, letter: char) -> Option<&mut bool> {
        Some(match letter {
            'd' => &mut self.has_indices,
            'g' => &mut self.global,
            'i' => &mut self.ignore_case,
            'm' => &mut self.multiline,
            's' => &mut self.dot_all,
            'u' => &mut self.unicode,
            'y' => &mut self.sticky,
            _ => return None,
        })
    }

    fn bits(self) -> [bool; 7] {
        [
            self.has_indices,
            self.global,
            self.ignore_case,
            self.multiline,
            self.dot_all,
            self.unicode,
            self.sticky,
        ]
    }

    fn from_bits(bits: [bool; 7]) -> Self {
        let [has_indices, global, ignore_case, multiline, dot_all, unicode, sticky] = bits;
        Flags {
            has_indices,
            global,
            ignore_case,
            multiline,
            dot_all,
            unicode,
            sticky,
        }
    }

    pub fn union(self, other: Flags) -> Flags {
        let (a, b) = (self.bits(), other.bits());
        Flags::from_bits(std::array::from_fn(|i| a[i] || b[i]))
    }

    pub fn difference(self, other: Flags) -> Flags {
        let (a, b) = (self.bits(), other.bits());
        Flags::from_bits(std::array::from_fn(|i| a[i] && !b[i]))
    }

    pub fn is_empty(self) -> bool {
        self == Flags::NONE
    }
}

impl FromStr for Flags {
    type Err = FlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flags::parse(s)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, set) in LETTERS.iter().zip(self.bits()) {
            if set {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
