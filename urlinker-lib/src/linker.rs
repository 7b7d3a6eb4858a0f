use std::sync::Arc;

use crate::{
    Candidate, ErrorKind, Options, Result,
    extract::{LinkPattern, classify, markup::scan},
    helpers::escape::escape_html,
    render::{LinkOutput, LinkRenderer, Renderer},
    tld::{self, TldSet},
    types::{EMAIL_LINK_CREATOR, HTML_LINK_CREATOR},
};

/// Turns bare web and mail addresses into links.
///
/// A linker is immutable once built and can be shared between threads.
///
/// ```
/// use urlinker_lib::UrlLinker;
///
/// let linker = UrlLinker::default();
/// assert_eq!(
///     linker.link_urls_and_escape_html("<b>example.com</b>").unwrap(),
///     r#"&lt;b&gt;<a href="http://example.com">example.com</a>&lt;/b&gt;"#
/// );
/// assert_eq!(
///     linker.link_urls_in_trusted_html("<b>example.com</b>").unwrap(),
///     r#"<b><a href="http://example.com">example.com</a></b>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct UrlLinker {
    pattern: LinkPattern,
    valid_tlds: Arc<TldSet>,
    html_link_creator: Renderer,
    email_link_creator: Renderer,
}

impl Default for UrlLinker {
    fn default() -> Self {
        Self {
            pattern: LinkPattern::default(),
            valid_tlds: tld::load(),
            html_link_creator: Renderer::url_anchor(),
            email_link_creator: Renderer::email_anchor(),
        }
    }
}

impl UrlLinker {
    /// Create a linker from the given options.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::Pattern`] if the address pattern cannot be
    /// compiled.
    pub fn new(options: Options) -> Result<Self> {
        let pattern = LinkPattern::build(&options)?;
        let valid_tlds = options
            .valid_tlds()
            .cloned()
            .map_or_else(tld::load, Arc::new);

        Ok(Self {
            pattern,
            valid_tlds,
            html_link_creator: options.html_link_creator().clone(),
            email_link_creator: options.email_link_creator().clone(),
        })
    }

    /// Link the addresses in untrusted plain text.
    ///
    /// Everything except the generated links is HTML-escaped.
    ///
    /// # Errors
    ///
    /// Fails if a link renderer fails or does not return text.
    pub fn link_urls_and_escape_html(&self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        self.link_text(text, true, &mut out)?;
        Ok(out)
    }

    /// Link the addresses in the text content of trusted HTML.
    ///
    /// Tags, character references and the content of existing anchors are
    /// copied unchanged. Nothing is escaped.
    ///
    /// # Errors
    ///
    /// Fails if a link renderer fails or does not return text.
    pub fn link_urls_in_trusted_html(&self, html: &str) -> Result<String> {
        let mut out = String::with_capacity(html.len());
        for region in scan(html) {
            let content = region.as_str(html);
            if region.is_text() {
                self.link_text(content, false, &mut out)?;
            } else {
                out.push_str(content);
            }
        }
        Ok(out)
    }

    fn link_text(&self, text: &str, escape: bool, out: &mut String) -> Result<()> {
        let push_gap = |out: &mut String, gap: &str| {
            if escape {
                out.push_str(&escape_html(gap));
            } else {
                out.push_str(gap);
            }
        };

        let mut last = 0;
        for candidate in classify(text, &self.pattern, &self.valid_tlds) {
            push_gap(out, &text[last..candidate.span.start]);
            out.push_str(&self.render(&candidate)?);
            last = candidate.span.end;
        }
        push_gap(out, &text[last..]);
        Ok(())
    }

    fn render(&self, candidate: &Candidate<'_>) -> Result<String> {
        let (renderer, option) = if candidate.is_email() {
            (&self.email_link_creator, EMAIL_LINK_CREATOR)
        } else {
            (&self.html_link_creator, HTML_LINK_CREATOR)
        };

        match renderer
            .render(&candidate.target, candidate.display)
            .map_err(ErrorKind::Renderer)?
        {
            LinkOutput::Markup(markup) => Ok(markup),
            LinkOutput::NotText(actual) => Err(ErrorKind::ContractViolation { option, actual }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_linker_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UrlLinker>();
    }

    #[test]
    fn test_default_matches_default_options() {
        let text = "Mail bob@example.com or visit HTTP://EXAMPLE.COM and ftp://e.com.";
        assert_eq!(
            UrlLinker::default().link_urls_and_escape_html(text).unwrap(),
            UrlLinker::new(Options::default())
                .unwrap()
                .link_urls_and_escape_html(text)
                .unwrap()
        );
    }

    #[test]
    fn test_contract_violation_names_option() {
        let linker = UrlLinker::new(
            Options::builder()
                .email_link_creator(Renderer::from_fn(|_: &str, _: &str| {}))
                .build(),
        )
        .unwrap();

        assert_eq!(
            linker.link_urls_in_trusted_html("user@example.com").unwrap_err(),
            ErrorKind::ContractViolation {
                option: "emailLinkCreator",
                actual: "()",
            }
        );
        // Web addresses still use the default renderer
        assert!(linker.link_urls_in_trusted_html("example.com").is_ok());
    }

    #[test]
    fn test_text_without_candidates_is_only_escaped() {
        let linker = UrlLinker::default();
        assert_eq!(
            linker.link_urls_and_escape_html("a < b & \"c\"").unwrap(),
            "a &lt; b &amp; &quot;c&quot;"
        );
        assert_eq!(
            linker.link_urls_in_trusted_html("a < b & \"c\"").unwrap(),
            "a < b & \"c\""
        );
    }
}
