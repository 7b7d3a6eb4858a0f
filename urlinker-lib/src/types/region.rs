use std::ops::Range;

/// Whether a region of an HTML document may receive links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Tags, entity references, and the content of existing anchors.
    /// Emitted byte for byte.
    Markup,
    /// Text content in which bare addresses get linked.
    Text,
}

/// A contiguous span of the input, classified as markup or linkable text.
///
/// The regions returned by [`scan`](crate::extract::markup::scan) are ordered
/// and partition the input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    /// What the span contains
    pub kind: RegionKind,
    /// Byte range in the original input
    pub span: Range<usize>,
}

impl Region {
    /// Create a new markup region
    #[must_use]
    pub const fn markup(span: Range<usize>) -> Self {
        Self {
            kind: RegionKind::Markup,
            span,
        }
    }

    /// Create a new text region
    #[must_use]
    pub const fn text(span: Range<usize>) -> Self {
        Self {
            kind: RegionKind::Text,
            span,
        }
    }

    /// Returns `true` if links may be inserted into this region
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self.kind, RegionKind::Text)
    }

    /// Slice the region out of the input it was scanned from
    #[inline]
    #[must_use]
    pub fn as_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}
