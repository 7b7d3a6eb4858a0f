//! Turning a recognized address into markup.
//!
//! A [`LinkRenderer`] receives the link target and the text to show and
//! returns the markup that replaces the address. The defaults produce a
//! plain `<a href="...">...</a>`; [`Renderer::from_fn`] and
//! [`Renderer::template`] plug in custom markup.
use std::{borrow::Cow, fmt::Debug, sync::Arc};

use crate::{BoxError, helpers::escape::escape_html};

/// What a link renderer produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutput {
    /// Markup to insert in place of the address
    Markup(String),
    /// The renderer produced something that is not text.
    /// Holds the name of the type it produced.
    NotText(&'static str),
}

/// Conversion from the return value of a renderer closure into a
/// [`LinkOutput`].
///
/// Text converts to [`LinkOutput::Markup`]; `None` and `()` convert to
/// [`LinkOutput::NotText`]; the error of a `Result` is handed back as is.
pub trait IntoLinkOutput {
    /// Perform the conversion
    fn into_link_output(self) -> Result<LinkOutput, BoxError>;
}

impl IntoLinkOutput for String {
    fn into_link_output(self) -> Result<LinkOutput, BoxError> {
        Ok(LinkOutput::Markup(self))
    }
}

impl IntoLinkOutput for &str {
    fn into_link_output(self) -> Result<LinkOutput, BoxError> {
        Ok(LinkOutput::Markup(self.to_owned()))
    }
}

impl IntoLinkOutput for Cow<'_, str> {
    fn into_link_output(self) -> Result<LinkOutput, BoxError> {
        Ok(LinkOutput::Markup(self.into_owned()))
    }
}

impl IntoLinkOutput for () {
    fn into_link_output(self) -> Result<LinkOutput, BoxError> {
        Ok(LinkOutput::NotText("()"))
    }
}

impl<T: IntoLinkOutput> IntoLinkOutput for Option<T> {
    fn into_link_output(self) -> Result<LinkOutput, BoxError> {
        match self {
            Some(output) => output.into_link_output(),
            None => Ok(LinkOutput::NotText("None")),
        }
    }
}

impl<T, E> IntoLinkOutput for Result<T, E>
where
    T: IntoLinkOutput,
    E: Into<BoxError>,
{
    fn into_link_output(self) -> Result<LinkOutput, BoxError> {
        self.map_err(Into::into)?.into_link_output()
    }
}

/// Maps a link target and the text to show to the markup of a link
pub trait LinkRenderer: Send + Sync {
    /// Render one link.
    ///
    /// `href` is the raw target (`http://example.com?a=b&c=d`,
    /// `bob@example.com`), `content` the raw text to show. Neither is escaped.
    fn render(&self, href: &str, content: &str) -> Result<LinkOutput, BoxError>;
}

/// The default renderer for web addresses.
///
/// Produces `<a href="{href}">{content}</a>` with both parts HTML-escaped
/// and every `@` written as `&#64;`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlAnchor;

impl LinkRenderer for UrlAnchor {
    fn render(&self, href: &str, content: &str) -> Result<LinkOutput, BoxError> {
        Ok(LinkOutput::Markup(anchor(href, content)))
    }
}

/// The default renderer for mail addresses.
///
/// Like [`UrlAnchor`], with `mailto:` in front of the address.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailAnchor;

impl LinkRenderer for EmailAnchor {
    fn render(&self, href: &str, content: &str) -> Result<LinkOutput, BoxError> {
        Ok(LinkOutput::Markup(anchor(&format!("mailto:{href}"), content)))
    }
}

fn anchor(href: &str, content: &str) -> String {
    // `@` is always written as a character reference
    format!(
        r#"<a href="{}">{}</a>"#,
        escape_html(href),
        escape_html(content)
    )
    .replace('@', "&#64;")
}

/// Renders links from a template with `{href}` and `{content}` placeholders.
///
/// Both values are HTML-escaped before they are inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Placeholder for the link target
    pub const HREF: &'static str = "{href}";
    /// Placeholder for the text to show
    pub const CONTENT: &'static str = "{content}";

    /// Create a new template
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl LinkRenderer for Template {
    fn render(&self, href: &str, content: &str) -> Result<LinkOutput, BoxError> {
        let markup = self
            .source
            .split(Self::CONTENT)
            .map(|part| part.replace(Self::HREF, &escape_html(href)))
            .collect::<Vec<_>>()
            .join(&escape_html(content));
        Ok(LinkOutput::Markup(markup))
    }
}

struct FnRenderer<F>(F);

impl<F, R> LinkRenderer for FnRenderer<F>
where
    F: Fn(&str, &str) -> R + Send + Sync,
    R: IntoLinkOutput,
{
    fn render(&self, href: &str, content: &str) -> Result<LinkOutput, BoxError> {
        (self.0)(href, content).into_link_output()
    }
}

/// A shareable, type-erased [`LinkRenderer`]
#[derive(Clone)]
pub struct Renderer {
    inner: Arc<dyn LinkRenderer>,
    name: &'static str,
}

impl Renderer {
    /// Wrap any [`LinkRenderer`]
    #[must_use]
    pub fn new<R: LinkRenderer + 'static>(renderer: R) -> Self {
        Self {
            inner: Arc::new(renderer),
            name: std::any::type_name::<R>(),
        }
    }

    /// Use a closure as renderer.
    ///
    /// The closure may return `String`, `&str`, `Option<_>`, `()` or a
    /// `Result` of those. Returning `None` or `()` is a contract violation
    /// reported as [`ErrorKind::ContractViolation`](crate::ErrorKind::ContractViolation);
    /// an `Err` is passed through unchanged.
    ///
    /// ```
    /// use urlinker_lib::{Options, Renderer, UrlLinker};
    ///
    /// let options = Options::builder()
    ///     .html_link_creator(Renderer::from_fn(|href, content| {
    ///         format!(r#"<a href="{href}" target="_blank">{content}</a>"#)
    ///     }))
    ///     .build();
    /// let linker = UrlLinker::new(options).unwrap();
    /// assert_eq!(
    ///     linker.link_urls_in_trusted_html("example.com").unwrap(),
    ///     r#"<a href="http://example.com" target="_blank">example.com</a>"#
    /// );
    /// ```
    #[must_use]
    pub fn from_fn<F, R>(f: F) -> Self
    where
        F: Fn(&str, &str) -> R + Send + Sync + 'static,
        R: IntoLinkOutput + 'static,
    {
        Self {
            inner: Arc::new(FnRenderer(f)),
            name: "closure",
        }
    }

    /// Render links from a template, see [`Template`]
    #[must_use]
    pub fn template(source: impl Into<String>) -> Self {
        Self::new(Template::new(source))
    }

    /// The default renderer for web addresses
    #[must_use]
    pub fn url_anchor() -> Self {
        Self::new(UrlAnchor)
    }

    /// The default renderer for mail addresses
    #[must_use]
    pub fn email_anchor() -> Self {
        Self::new(EmailAnchor)
    }
}

impl LinkRenderer for Renderer {
    fn render(&self, href: &str, content: &str) -> Result<LinkOutput, BoxError> {
        self.inner.render(href, content)
    }
}

impl Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Renderer").field(&self.name).finish()
    }
}
