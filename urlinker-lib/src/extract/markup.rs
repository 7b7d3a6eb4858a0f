//! Splitting trusted HTML into markup and linkable text.
//!
//! This is a small two-state scanner, not an HTML parser. It knows just
//! enough to never touch tags, attribute values, character references,
//! comments and the content of existing anchors. Malformed input degrades
//! to text instead of failing.
use std::ops::Range;

use crate::{
    helpers::escape::entity_len,
    types::{Region, RegionKind},
};

/// Partition `html` into ordered [`Region`]s.
///
/// The regions cover the input exactly, without gaps or overlaps, and no two
/// neighbours have the same kind.
///
/// ```
/// use urlinker_lib::{Region, extract::markup::scan};
///
/// let regions = scan("<b>see example.com</b>");
/// assert_eq!(
///     regions,
///     vec![Region::markup(0..3), Region::text(3..18), Region::markup(18..22)]
/// );
/// ```
#[must_use]
pub fn scan(html: &str) -> Vec<Region> {
    let mut scanner = Scanner::default();
    let bytes = html.as_bytes();

    let mut pos = 0;
    let mut text_start = 0;
    while pos < bytes.len() {
        let markup_len = match bytes[pos] {
            b'<' => tag_len(&bytes[pos..]),
            b'&' => entity_len(&html[pos..]),
            _ => None,
        };

        match markup_len {
            Some(len) => {
                scanner.text(text_start..pos);
                scanner.push(RegionKind::Markup, pos..pos + len);
                scanner.track_anchor(&bytes[pos..pos + len]);
                pos += len;
                text_start = pos;
            }
            // `<` and `&` are ASCII, so stepping bytewise never lands a
            // markup start inside a multi-byte character
            None => pos += 1,
        }
    }
    scanner.text(text_start..bytes.len());

    scanner.regions
}

#[derive(Debug, Default)]
struct Scanner {
    regions: Vec<Region>,
    /// Number of `<a>` elements we are currently inside of
    anchor_depth: usize,
}

impl Scanner {
    /// Emit character data; inside an anchor it is markup
    fn text(&mut self, span: Range<usize>) {
        let kind = if self.anchor_depth > 0 {
            RegionKind::Markup
        } else {
            RegionKind::Text
        };
        self.push(kind, span);
    }

    fn push(&mut self, kind: RegionKind, span: Range<usize>) {
        if span.is_empty() {
            return;
        }
        if let Some(last) = self.regions.last_mut()
            && last.kind == kind
            && last.span.end == span.start
        {
            last.span.end = span.end;
            return;
        }
        self.regions.push(Region { kind, span });
    }

    fn track_anchor(&mut self, tag: &[u8]) {
        match anchor_tag(tag) {
            Some(AnchorTag::Open) => self.anchor_depth += 1,
            Some(AnchorTag::Close) => self.anchor_depth = self.anchor_depth.saturating_sub(1),
            None => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnchorTag {
    Open,
    Close,
}

/// Length of the tag or comment at the start of `input`.
///
/// `input` starts with `<`. Returns `None` if it does not open a tag or the
/// tag is never closed.
fn tag_len(input: &[u8]) -> Option<usize> {
    match input.get(1) {
        Some(b) if b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?') => {}
        _ => return None,
    }

    if input.starts_with(b"<!--") {
        return input[4..]
            .windows(3)
            .position(|w| w == b"-->")
            .map(|end| 4 + end + 3);
    }

    let mut quote = None;
    for (i, &b) in input.iter().enumerate().skip(1) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => return Some(i + 1),
                _ => {}
            },
        }
    }
    None
}

fn anchor_tag(tag: &[u8]) -> Option<AnchorTag> {
    let (kind, name_start) = match tag.get(1) {
        Some(b'/') => (AnchorTag::Close, 2),
        _ => (AnchorTag::Open, 1),
    };
    let name_len = tag
        .get(name_start..)?
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();

    if !tag[name_start..name_start + name_len].eq_ignore_ascii_case(b"a") {
        return None;
    }
    if kind == AnchorTag::Open && tag.ends_with(b"/>") {
        return None;
    }
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Render regions as `[markup]` and `text` for compact assertions
    fn show(html: &str) -> String {
        scan(html)
            .iter()
            .map(|r| match r.kind {
                RegionKind::Markup => format!("[{}]", r.as_str(html)),
                RegionKind::Text => r.as_str(html).to_string(),
            })
            .collect()
    }

    #[rstest]
    #[case("", "")]
    #[case("plain text", "plain text")]
    #[case("<p>text</p>", "[<p>]text[</p>]")]
    #[case("<p title='10>20'>Tricky</p>", "[<p title='10>20'>]Tricky[</p>]")]
    #[case(r#"<div class="a>b">x</div>"#, r#"[<div class="a>b">]x[</div>]"#)]
    #[case("a&amp;b", "a[&amp;]b")]
    #[case("a&#64;b&#x40;c", "a[&#64;]b[&#x40;]c")]
    #[case("a&amp%3bb", "a&amp%3bb")]
    #[case("1 < 2 and 3 <b", "1 < 2 and 3 <b")]
    #[case("<p unterminated='x>", "<p unterminated='x>")]
    #[case("<!-- a > b -->x", "[<!-- a > b -->]x")]
    #[case("<!doctype html><?xml?>x", "[<!doctype html><?xml?>]x")]
    #[case("x <a href=\"e.com\">e.com</a> y", "x [<a href=\"e.com\">e.com</a>] y")]
    #[case("<A HREF=x>e.com</A>z", "[<A HREF=x>e.com</A>]z")]
    #[case("<a><b>e.com</b></a>z", "[<a><b>e.com</b></a>]z")]
    #[case("<abbr>e.com</abbr>", "[<abbr>]e.com[</abbr>]")]
    #[case("<a name=x />e.com", "[<a name=x />]e.com")]
    #[case("</a>stray close", "[</a>]stray close")]
    fn test_scan(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(show(html), expected);
    }

    #[test]
    fn test_unclosed_anchor_swallows_rest() {
        assert_eq!(show("<a href=x>e.com and more"), "[<a href=x>e.com and more]");
    }

    #[rstest]
    #[case("<p>Send me an <a href=\"bob@example.com\">e-mail</a>\nat bob@example.com.</p>")]
    #[case("møøse &amp; <i>żółć</i> < 3 &")]
    #[case("<<<>>>&&&;;;")]
    fn test_regions_partition_input(#[case] html: &str) {
        let regions = scan(html);

        let mut end = 0;
        for region in &regions {
            assert_eq!(region.span.start, end);
            assert!(!region.span.is_empty());
            end = region.span.end;
        }
        assert_eq!(end, html.len());

        for pair in regions.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
        }
    }
}
