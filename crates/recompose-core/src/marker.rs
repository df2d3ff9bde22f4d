//! Deferred back reference markers.
//!
//! A deferred builder may refer to a group of the pattern it is being embedded in before
//! the final numbering is known. The reference is written as `(?:$ ^d:DEPTH,n:INDEX)`:
//! a group that can never match, tagged with how many assembly passes remain before it
//! resolves and the group index local to that pass.

const PREFIX: &str = "?:$ ^d:";

/// Source text of a reference to local group `index`, resolving after `depth` more passes.
pub fn deferred_ref(index: u32, depth: u32) -> String {
    format!("(?:$ ^d:{depth},n:{index})")
}

/// Parses a whole marker, returning `(depth, index)`.
pub fn parse(text: &str) -> Option<(u32, u32)> {
    let rest = text.strip_prefix('(')?;
    match parse_tail(rest) {
        Some((depth, index, len)) if len == rest.len() => Some((depth, index)),
        _ => None,
    }
}

/// Parses a marker after its opening paren, returning `(depth, index, consumed)`.
pub(crate) fn parse_tail(text: &str) -> Option<(u32, u32, usize)> {
    let body = text.strip_prefix(PREFIX)?;
    let (depth, after_depth) = leading_number(body)?;
    let body = body[after_depth..].strip_prefix(",n:")?;
    let (index, after_index) = leading_number(body)?;
    if !body[after_index..].starts_with(')') {
        return None;
    }
    let consumed = PREFIX.len() + after_depth + ",n:".len() + after_index + 1;
    Some((depth, index, consumed))
}

fn leading_number(text: &str) -> Option<(u32, usize)> {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    let value = text[..len].parse().ok()?;
    Some((value, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_and_parses() {
        let text = deferred_ref(3, 1);
        assert_eq!(text, "(?:$ ^d:1,n:3)");
        assert_eq!(parse(&text), Some((1, 3)));
    }

    #[test]
    fn rejects_partial_markers() {
        assert_eq!(parse("(?:$ ^d:1,n:)"), None);
        assert_eq!(parse("(?:$ ^d:1,n:2"), None);
        assert_eq!(parse("(?:$ ^d:1,n:2)x"), None);
        assert_eq!(parse("(?:$^d:1,n:2)"), None);
    }
}
