//! Group name validity under wide-mode identifier rules.

use std::sync::LazyLock;

use regex_automata::meta::Regex;

static GROUP_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_$\p{ID_Start}][$\p{ID_Continue}\x{200C}\x{200D}]*$")
        .expect("group name pattern is valid")
});

/// Whether the raw text between `\k<` and `>` names a group in wide mode.
///
/// `\uXXXX` and `\u{X...}` escapes are decoded first, as the host does.
pub fn is_group_name(raw: &str) -> bool {
    match unescape(raw) {
        Some(name) => GROUP_NAME.is_match(&name),
        None => false,
    }
}

/// Decodes unicode escapes in a group name. Any other escape is invalid.
pub fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let escape = rest[pos + 1..].strip_prefix('u')?;
        let (code, len) = if let Some(braced) = escape.strip_prefix('{') {
            let end = braced.find('}')?;
            (u32::from_str_radix(&braced[..end], 16).ok()?, end + 2)
        } else {
            let digits = escape.get(..4)?;
            (u32::from_str_radix(digits, 16).ok()?, 4)
        };
        out.push(char::from_u32(code)?);
        rest = &escape[len..];
    }
    out.push_str(rest);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_group_name("year"));
        assert!(is_group_name("_private$1"));
        assert!(is_group_name("\u{3c0}"));
        assert!(is_group_name(r"abc"));
        assert!(is_group_name(r"\u{62}"));
    }

    #[test]
    fn non_identifiers() {
        assert!(!is_group_name(""));
        assert!(!is_group_name("1st"));
        assert!(!is_group_name("a-b"));
        assert!(!is_group_name(r"\x61"));
        assert!(!is_group_name(r"\u{110000}"));
    }

    #[test]
    fn unescapes_both_forms() {
        assert_eq!(unescape(r"ab\u{63}d").as_deref(), Some("abcd"));
        assert_eq!(unescape(r"\u00").as_deref(), None);
    }
}
