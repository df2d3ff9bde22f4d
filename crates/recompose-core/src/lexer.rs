//! Lexer for ECMAScript pattern source text.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//! Every token also records whether it was read inside a character class, so analyzers can
//! tell a grouping `(` from a literal one without building a tree.
//!
//! ## Context tracking
//!
//! Class state lives in the lexer extras. The opening `[` of a class is read in
//! [`Context::Pattern`], its closing `]` in [`Context::Class`]. `[^]` outside a class is a
//! single token that never enters the class state. A `]` seen outside a class is a stray
//! literal and stays in pattern context.
//!
//! Multi-character constructs (escapes, group openers, brace quantifiers) are recognized by
//! callbacks on a single-character token, which then bump over the rest.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. A lone trailing `\` is the only input that errors.

use logos::{Lexer, Logos};
use std::ops::Range;

use crate::marker;

/// Where a token was read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Context {
    #[default]
    Pattern,
    Class,
}

/// What follows a backslash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// `\1` to `\99`. Two digits are always taken, as the host does for numbering purposes.
    Backref(u8),
    /// `\0` not followed by a digit.
    Null,
    /// `\0` followed by digits.
    Octal,
    /// `\d \D \s \S \w \W`.
    ClassShorthand(char),
    /// `\k<name>`.
    NamedRef,
    /// `\uXXXX`.
    Unicode,
    /// `\u{X...}`.
    UnicodeBraced,
    /// `\xHH`.
    Hex,
    /// `\cX` with an ASCII letter.
    Control,
    /// `\p{...}` or `\P{...}`.
    Property,
    /// Anything else, including `\b`, `\B` and identity escapes.
    Char(char),
}

/// Flavor of `(`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOpen {
    Capture,
    /// `(?<name>`, consumed whole so rewriters never touch the name.
    Named,
    NonCapture,
    Lookahead,
    NegativeLookahead,
    Lookbehind,
    NegativeLookbehind,
    /// Any other `(?`, such as inline modifiers.
    Modifiers,
    /// A whole deferred reference marker, see [`crate::marker`].
    Deferred { depth: u32, index: u32 },
}

impl GroupOpen {
    pub fn is_capture(self) -> bool {
        matches!(self, GroupOpen::Capture | GroupOpen::Named)
    }

    pub fn is_lookaround(self) -> bool {
        matches!(
            self,
            GroupOpen::Lookahead
                | GroupOpen::NegativeLookahead
                | GroupOpen::Lookbehind
                | GroupOpen::NegativeLookbehind
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassOpen {
    Plain,
    /// `[^]`, which matches any code unit.
    EmptyNegated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brace {
    /// `{n}`, `{n,}` or `{n,m}`, consumed whole.
    Quantifier,
    /// Any other `{`, literal in narrow mode.
    Literal,
}

/// Token kinds. Only single characters are declared as tokens; callbacks extend them.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = Context)]
pub enum TokenKind {
    #[token("\\", lex_escape)]
    Escape(Escape),

    #[token("(", lex_group_open)]
    GroupOpen(GroupOpen),

    #[token(")")]
    GroupClose,

    #[token("[", lex_class_open)]
    ClassOpen(ClassOpen),

    #[token("]", lex_class_close)]
    ClassClose,

    #[token("|")]
    Pipe,

    #[token(".")]
    Dot,

    #[token("^")]
    Caret,

    #[token("$")]
    Dollar,

    #[token("-")]
    Dash,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[token("{", lex_brace)]
    BraceOpen(Brace),

    #[token("}")]
    BraceClose,

    #[regex(r"[^\\()\[\]|.^$*+?{}-]")]
    Char,

    /// Coalesced lexer errors.
    Garbage,
}

impl TokenKind {
    /// Tokens that repeat the preceding atom.
    pub fn is_quantifier(self) -> bool {
        matches!(
            self,
            TokenKind::Star
                | TokenKind::Plus
                | TokenKind::Question
                | TokenKind::BraceOpen(Brace::Quantifier)
        )
    }
}

fn lex_escape(lex: &mut Lexer<'_, TokenKind>) -> Option<Escape> {
    let rest = lex.remainder();
    let c = rest.chars().next()?;
    let bytes = rest.as_bytes();
    let (escape, len) = match c {
        '1'..='9' => match bytes.get(1) {
            Some(d) if d.is_ascii_digit() => {
                let n = (bytes[0] - b'0') * 10 + (d - b'0');
                (Escape::Backref(n), 2)
            }
            _ => (Escape::Backref(bytes[0] - b'0'), 1),
        },
        '0' => {
            let digits = bytes[1..]
                .iter()
                .take(2)
                .take_while(|b| matches!(b, b'0'..=b'7'))
                .count();
            if digits == 0 && !bytes.get(1).is_some_and(u8::is_ascii_digit) {
                (Escape::Null, 1)
            } else {
                (Escape::Octal, 1 + digits)
            }
        }
        'd' | 'D' | 's' | 'S' | 'w' | 'W' => (Escape::ClassShorthand(c), 1),
        'k' => match named_ref_len(rest) {
            Some(len) => (Escape::NamedRef, len),
            None => (Escape::Char('k'), 1),
        },
        'u' => {
            if let Some(len) = braced_hex_len(&rest[1..]) {
                (Escape::UnicodeBraced, 1 + len)
            } else if hex_digits(&bytes[1..], 4) {
                (Escape::Unicode, 5)
            } else {
                (Escape::Char('u'), 1)
            }
        }
        'x' if hex_digits(&bytes[1..], 2) => (Escape::Hex, 3),
        'c' if bytes.get(1).is_some_and(u8::is_ascii_alphabetic) => (Escape::Control, 2),
        'p' | 'P' => match property_len(&rest[1..]) {
            Some(len) => (Escape::Property, 1 + len),
            None => (Escape::Char(c), 1),
        },
        _ => (Escape::Char(c), c.len_utf8()),
    };
    lex.bump(len);
    Some(escape)
}

fn hex_digits(bytes: &[u8], n: usize) -> bool {
    bytes.len() >= n && bytes[..n].iter().all(u8::is_ascii_hexdigit)
}

/// Length of `{hex+}` at the start of `text`.
fn braced_hex_len(text: &str) -> Option<usize> {
    let body = text.strip_prefix('{')?;
    let digits = body.bytes().take_while(u8::is_ascii_hexdigit).count();
    (digits > 0 && body[digits..].starts_with('}')).then_some(digits + 2)
}

/// Length of `{Name}` or `{Name=Value}` at the start of `text`.
fn property_len(text: &str) -> Option<usize> {
    let body = text.strip_prefix('{')?;
    let len = body
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'=')
        .count();
    (len > 0 && body[len..].starts_with('}')).then_some(len + 2)
}

/// Length of `k<name>` at the start of `text`.
fn named_ref_len(text: &str) -> Option<usize> {
    text.strip_prefix("k<").and_then(group_name_len).map(|len| len + 2)
}

/// Length of `name>` at the start of `text`. The name may not span a bracket or paren.
fn group_name_len(text: &str) -> Option<usize> {
    let end = text.find(['>', ']', '(', ')'])?;
    (text.as_bytes()[end] == b'>' && end > 0).then_some(end + 1)
}

fn lex_group_open(lex: &mut Lexer<'_, TokenKind>) -> GroupOpen {
    if lex.extras == Context::Class {
        return GroupOpen::Capture;
    }
    let rest = lex.remainder();
    if let Some((depth, index, len)) = marker::parse_tail(rest) {
        lex.bump(len);
        return GroupOpen::Deferred { depth, index };
    }
    let (open, len) = if rest.starts_with("?:") {
        (GroupOpen::NonCapture, 2)
    } else if rest.starts_with("?=") {
        (GroupOpen::Lookahead, 2)
    } else if rest.starts_with("?!") {
        (GroupOpen::NegativeLookahead, 2)
    } else if rest.starts_with("?<=") {
        (GroupOpen::Lookbehind, 3)
    } else if rest.starts_with("?<!") {
        (GroupOpen::NegativeLookbehind, 3)
    } else if rest.starts_with("?<") {
        let name = group_name_len(&rest[2..]).unwrap_or(0);
        (GroupOpen::Named, 2 + name)
    } else if rest.starts_with('?') {
        (GroupOpen::Modifiers, 1)
    } else {
        (GroupOpen::Capture, 0)
    };
    lex.bump(len);
    open
}

fn lex_class_open(lex: &mut Lexer<'_, TokenKind>) -> ClassOpen {
    if lex.extras == Context::Class {
        return ClassOpen::Plain;
    }
    if lex.remainder().starts_with("^]") {
        lex.bump(2);
        return ClassOpen::EmptyNegated;
    }
    lex.extras = Context::Class;
    ClassOpen::Plain
}

fn lex_class_close(lex: &mut Lexer<'_, TokenKind>) -> bool {
    lex.extras = Context::Pattern;
    true
}

fn lex_brace(lex: &mut Lexer<'_, TokenKind>) -> Brace {
    if lex.extras == Context::Class {
        return Brace::Literal;
    }
    match quantifier_len(lex.remainder()) {
        Some(len) => {
            lex.bump(len);
            Brace::Quantifier
        }
        None => Brace::Literal,
    }
}

/// Length of `n}`, `n,}` or `n,m}` at the start of `text`.
fn quantifier_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let min = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if min == 0 {
        return None;
    }
    let mut pos = min;
    if bytes.get(pos) == Some(&b',') {
        pos += 1;
        pos += bytes[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
    }
    (bytes.get(pos) == Some(&b'}')).then_some(pos + 1)
}

/// Zero-copy token: kind, span and context; text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
    pub context: Context,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>, context: Context) -> Self {
        Self {
            kind,
            span,
            context,
        }
    }

    #[inline]
    pub fn in_class(&self) -> bool {
        self.context == Context::Class
    }
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the Logos output to coalesce consecutive lexer errors into single `Garbage` tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<(usize, Context)> = None;

    loop {
        let context = lexer.extras;
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some((start, context)) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, start..end, context));
                }
                tokens.push(Token::new(kind, lexer.span(), context));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some((lexer.span().start, context));
                }
            }
            None => {
                if let Some((start, context)) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..source.len(), context));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.clone()]
}
