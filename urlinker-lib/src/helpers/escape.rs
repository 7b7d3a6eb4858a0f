use std::borrow::Cow;

/// Escape `&`, `"`, `<` and `>` for use in HTML text and double-quoted
/// attribute values.
///
/// Character references that are already present (`&amp;`, `&#64;`,
/// `&#x40;`) are left alone, so escaping is idempotent. Single quotes are
/// not touched.
pub(crate) fn escape_html(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(['&', '"', '<', '>']) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 16);
    out.push_str(&input[..first]);
    for (i, c) in input[first..].char_indices() {
        match c {
            '&' if entity_len(&input[first + i..]).is_some() => out.push('&'),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Length in bytes of the character reference at the start of `input`, if
/// there is one.
///
/// Recognizes named (`&amp;`), decimal (`&#64;`) and hexadecimal (`&#x40;`)
/// references. The name is not checked against a table of known entities.
pub(crate) fn entity_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'&') {
        return None;
    }

    let (start, len) = match bytes.get(1) {
        Some(b'#') => match bytes.get(2) {
            Some(b'x' | b'X') => (3, count_while(&bytes[3..], u8::is_ascii_hexdigit)),
            _ => (2, count_while(&bytes[2..], u8::is_ascii_digit)),
        },
        Some(b) if b.is_ascii_alphabetic() => (1, count_while(&bytes[1..], u8::is_ascii_alphanumeric)),
        _ => return None,
    };

    let end = start + len;
    (len > 0 && bytes.get(end) == Some(&b';')).then_some(end + 1)
}

fn count_while(bytes: &[u8], pred: impl Fn(&u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| pred(&b)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("'", "'")]
    #[case("\"", "&quot;")]
    #[case("&quot;", "&quot;")]
    #[case("<>", "&lt;&gt;")]
    #[case("&lt;&gt;", "&lt;&gt;")]
    #[case("&", "&amp;")]
    #[case("&amp;", "&amp;")]
    #[case("&amp%3b", "&amp;amp%3b")]
    #[case("&#64;", "&#64;")]
    #[case("&#x40;", "&#x40;")]
    #[case("&#;", "&amp;#;")]
    #[case("&#x;", "&amp;#x;")]
    #[case("a & b", "a &amp; b")]
    #[case("<div class=\"test\">", "&lt;div class=&quot;test&quot;&gt;")]
    #[case("møøse & żółć", "møøse &amp; żółć")]
    fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html(input), expected);
    }

    #[rstest]
    #[case("<script>alert('x & y')</script>")]
    #[case("a=b&c=d&amp;e=f")]
    #[case("\"&&\"")]
    fn test_escape_html_is_idempotent(#[case] input: &str) {
        let once = escape_html(input);
        assert_eq!(escape_html(&once), once);
    }

    #[test]
    fn test_escape_html_borrows_clean_input() {
        assert!(matches!(escape_html("nothing to do"), Cow::Borrowed(_)));
    }

    #[rstest]
    #[case("&amp;c=d", Some(5))]
    #[case("&#64;", Some(5))]
    #[case("&#X1F;x", Some(6))]
    #[case("&amp", None)]
    #[case("& amp;", None)]
    #[case("&1;", None)]
    #[case("amp;", None)]
    fn test_entity_len(#[case] input: &str, #[case] expected: Option<usize>) {
        assert_eq!(entity_len(input), expected);
    }
}
