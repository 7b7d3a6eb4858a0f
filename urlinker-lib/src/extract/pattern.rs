//! The pattern that recognizes web and mail addresses in text.
//!
//! Its shape is fixed. Only the scheme alternation (FTP on or off) and the
//! case sensitivity depend on the [`Options`].
use std::sync::LazyLock;

use fancy_regex::{Captures, Regex};

use crate::{Options, Result};

/// Every character above the ASCII range, for use inside a character class.
const NON_ASCII: &str = r"\x{7f}-\x{10FFFF}";

/// Characters allowed in a username or password.
const USERINFO_CHAR: &str = r#"[^\]\\\x{00}-\x{20}"(),:;<>@\[\x{7f}-\x{10FFFF}]"#;

/// Characters allowed in a path or query.
const PATH_CHAR: &str = r"[!$-/0-9:;=@_'a-zA-Z\x{7f}-\x{10FFFF}]";

/// Characters allowed in a fragment.
const FRAGMENT_CHAR: &str = r"[!$-/0-9?:;=@_'a-zA-Z\x{7f}-\x{10FFFF}]";

/// Optional trailing punctuation, then something that cannot continue an
/// address. Used as lookahead so the punctuation is never part of a match.
const TRAILER: &str = r"[)'?.!,;:]*(?:[^\-_#$+.!*%'(),;/?:@=&a-zA-Z0-9\x{7f}-\x{10FFFF}]|$)";

const IPV4: &str = r"(?:[1-9][0-9]{0,2}\.|0\.){3}(?:[1-9][0-9]{0,2}|0)";

static DEFAULT_PATTERN: LazyLock<LinkPattern> =
    LazyLock::new(|| LinkPattern::build(&Options::default()).unwrap());

/// The compiled address pattern.
///
/// Named groups: `email` for mail addresses; `scheme`, `username`,
/// `password`, `host` (with `ipv4` when it is a dotted quad), `suffix`,
/// `port`, `path`, `query` and `fragment` for web addresses.
#[derive(Debug, Clone)]
pub struct LinkPattern {
    regex: Regex,
}

impl LinkPattern {
    /// Compile the pattern for the given options
    pub fn build(options: &Options) -> Result<Self> {
        let source = source(
            options.allow_ftp_addresses(),
            options.allow_upper_case_url_schemes(),
        );
        Ok(Self {
            regex: Regex::new(&source)?,
        })
    }

    /// The pattern source
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the next address in `text` at or after byte `pos`.
    ///
    /// Text in front of `pos` is still visible to the word-boundary check.
    /// Fails if the matcher gives up, e.g. when the backtrack limit is
    /// exceeded.
    pub(crate) fn captures_from_pos<'t>(
        &self,
        text: &'t str,
        pos: usize,
    ) -> std::result::Result<Option<Captures<'t>>, fancy_regex::Error> {
        self.regex.captures_from_pos(text, pos)
    }
}

impl Default for LinkPattern {
    /// The pattern for [`Options::default`], compiled once per process
    fn default() -> Self {
        DEFAULT_PATTERN.clone()
    }
}

fn source(allow_ftp: bool, allow_upper_case: bool) -> String {
    // Atomic: a label is never followed by another label character
    let label = format!("(?>[-a-zA-Z0-9{NON_ASCII}]{{1,63}})");
    let last_label = format!("(?>[a-zA-Z{NON_ASCII}][-a-zA-Z0-9{NON_ASCII}]{{1,62}})");
    let domain = format!(r"(?:{label}\.)+{last_label}");
    let scheme = if allow_ftp {
        "https?://|ftp://"
    } else {
        "https?://"
    };
    let flags = if allow_upper_case { "(?i)" } else { "" };

    format!(
        concat!(
            // Never start inside a dotted or hyphenated run
            r"{flags}\b(?<![.\-])(?:",
            r"(?P<email>[a-zA-Z0-9_][a-zA-Z0-9+._\-]*@{domain})(?={trailer})",
            r"|",
            r"(?P<scheme>{scheme})?",
            r"(?:(?P<username>{userinfo}{{1,64}})(?::(?P<password>{userinfo}{{1,64}}))?@)?",
            r"(?P<host>{domain}|(?P<ipv4>{ipv4}))",
            r"(?P<suffix>(?P<port>:[0-9]{{1,5}})?(?P<path>/{path}*?)?(?P<query>\?{path}+?)?(?P<fragment>#{fragment}+?)?)",
            r"(?={trailer})",
            r")"
        ),
        flags = flags,
        domain = domain,
        trailer = TRAILER,
        scheme = scheme,
        userinfo = USERINFO_CHAR,
        ipv4 = IPV4,
        path = PATH_CHAR,
        fragment = FRAGMENT_CHAR,
    )
}
