use toml::{Table, Value};
use typed_builder::TypedBuilder;

use crate::{ErrorKind, Renderer, Result, tld::TldSet};

/// Configuration key for [`Options::allow_ftp_addresses`]
pub const ALLOW_FTP_ADDRESSES: &str = "allowFtpAddresses";
/// Configuration key for [`Options::allow_upper_case_url_schemes`]
pub const ALLOW_UPPER_CASE_URL_SCHEMES: &str = "allowUpperCaseUrlSchemes";
/// Configuration key for [`Options::valid_tlds`]
pub const VALID_TLDS: &str = "validTlds";
/// Configuration key for the renderer of web addresses
pub const HTML_LINK_CREATOR: &str = "htmlLinkCreator";
/// Configuration key for the renderer of mail addresses
pub const EMAIL_LINK_CREATOR: &str = "emailLinkCreator";

/// Settings for a [`UrlLinker`](crate::UrlLinker).
///
/// Built once, read-only afterwards.
///
/// ```
/// use urlinker_lib::Options;
///
/// let options = Options::builder()
///     .allow_ftp_addresses(true)
///     .valid_tlds([".com", ".org"].into_iter().collect::<urlinker_lib::TldSet>())
///     .build();
/// assert!(options.allow_ftp_addresses());
/// assert!(!options.allow_upper_case_url_schemes());
/// ```
#[derive(TypedBuilder, Debug, Clone)]
#[builder(field_defaults(default, setter(into)))]
#[builder(builder_method(doc = "
Create a builder for building `Options`.

On the builder call, call methods with same name as its fields to set their values.

Finally, call `.build()` to create the instance of `Options`.
"))]
pub struct Options {
    /// Also link addresses starting with `ftp://`.
    ///
    /// When off, `ftp://example.com` links only `example.com`.
    allow_ftp_addresses: bool,

    /// Match schemes and hosts regardless of case (`HTTP://EXAMPLE.COM`).
    allow_upper_case_url_schemes: bool,

    /// Top-level domains a host must end in.
    ///
    /// Defaults to the built-in table, see [`crate::tld::load`].
    #[builder(setter(strip_option))]
    valid_tlds: Option<TldSet>,

    /// Renders web addresses
    #[builder(default = Renderer::url_anchor())]
    html_link_creator: Renderer,

    /// Renders mail addresses
    #[builder(default = Renderer::email_anchor())]
    email_link_creator: Renderer,
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Options {
    /// Whether `ftp://` addresses are linked
    #[must_use]
    pub const fn allow_ftp_addresses(&self) -> bool {
        self.allow_ftp_addresses
    }

    /// Whether matching ignores case
    #[must_use]
    pub const fn allow_upper_case_url_schemes(&self) -> bool {
        self.allow_upper_case_url_schemes
    }

    /// The custom TLD set, if one was given
    #[must_use]
    pub const fn valid_tlds(&self) -> Option<&TldSet> {
        self.valid_tlds.as_ref()
    }

    /// The renderer for web addresses
    #[must_use]
    pub const fn html_link_creator(&self) -> &Renderer {
        &self.html_link_creator
    }

    /// The renderer for mail addresses
    #[must_use]
    pub const fn email_link_creator(&self) -> &Renderer {
        &self.email_link_creator
    }

    /// Parse options from a TOML document, see [`Options::from_table`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigurationParse`] if the text is not valid
    /// TOML and [`ErrorKind::ConfigurationType`] if a value has the wrong
    /// type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: Table = toml::from_str(source)?;
        Self::from_table(&table)
    }

    /// Build options from a configuration map.
    ///
    /// | key                        | type                           |
    /// |----------------------------|--------------------------------|
    /// | `allowFtpAddresses`        | boolean                        |
    /// | `allowUpperCaseUrlSchemes` | boolean                        |
    /// | `validTlds`                | table of suffix to boolean     |
    /// | `htmlLinkCreator`          | template string                |
    /// | `emailLinkCreator`         | template string                |
    ///
    /// Only `validTlds` entries set to `true` count. Templates use the
    /// `{href}` and `{content}` placeholders. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigurationType`] naming the first key whose
    /// value has the wrong type.
    pub fn from_table(table: &Table) -> Result<Self> {
        let mut options = Self::default();

        for (key, value) in table {
            match key.as_str() {
                ALLOW_FTP_ADDRESSES => {
                    options.allow_ftp_addresses = expect_bool(ALLOW_FTP_ADDRESSES, value)?;
                }
                ALLOW_UPPER_CASE_URL_SCHEMES => {
                    options.allow_upper_case_url_schemes =
                        expect_bool(ALLOW_UPPER_CASE_URL_SCHEMES, value)?;
                }
                VALID_TLDS => options.valid_tlds = Some(tld_set(value)?),
                HTML_LINK_CREATOR => {
                    options.html_link_creator =
                        Renderer::template(expect_template(HTML_LINK_CREATOR, value)?);
                }
                EMAIL_LINK_CREATOR => {
                    options.email_link_creator =
                        Renderer::template(expect_template(EMAIL_LINK_CREATOR, value)?);
                }
                other => log::debug!("Ignoring unknown option `{other}`"),
            }
        }

        Ok(options)
    }
}

fn expect_bool(option: &'static str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| ErrorKind::ConfigurationType {
        option,
        expected: "boolean",
        actual: value.type_str().to_string(),
    })
}

fn expect_template<'a>(option: &'static str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| ErrorKind::ConfigurationType {
        option,
        expected: "template string",
        actual: value.type_str().to_string(),
    })
}

fn tld_set(value: &Value) -> Result<TldSet> {
    let type_error = |actual: String| ErrorKind::ConfigurationType {
        option: VALID_TLDS,
        expected: "table of booleans",
        actual,
    };

    let entries = value
        .as_table()
        .ok_or_else(|| type_error(value.type_str().to_string()))?;

    let mut set = TldSet::new();
    for (suffix, enabled) in entries {
        let enabled = enabled
            .as_bool()
            .ok_or_else(|| type_error(format!("table of {}", enabled.type_str())))?;
        if enabled {
            set.insert(suffix);
        }
    }
    Ok(set)
}
