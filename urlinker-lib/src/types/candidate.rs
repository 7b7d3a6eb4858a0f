use std::{borrow::Cow, fmt::Display, ops::Range};

/// The kind of address a [`Candidate`] stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// A web address, optionally with scheme, credentials, port, path,
    /// query and fragment
    Url,
    /// A mail address of the form `local@domain`
    Email,
}

impl Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkKind::Url => write!(f, "url"),
            LinkKind::Email => write!(f, "email"),
        }
    }
}

/// The `username[:password]@` prefix in front of a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Userinfo<'a> {
    /// Everything before the `:` or `@`
    pub username: &'a str,
    /// The password without its leading `:`
    pub password: Option<&'a str>,
}

/// Everything that follows the host of a URL, split into its parts.
///
/// Each part keeps its leading delimiter (`:`, `/`, `?`, `#`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Suffix<'a> {
    /// `:8080`
    pub port: Option<&'a str>,
    /// `/path/to/resource`
    pub path: Option<&'a str>,
    /// `?key=value&other=value`
    pub query: Option<&'a str>,
    /// `#fragment`
    pub fragment: Option<&'a str>,
}

impl Suffix<'_> {
    /// Returns `true` if nothing follows the host
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.port.is_none() && self.path.is_none() && self.query.is_none() && self.fragment.is_none()
    }
}

/// A recognized and validated address inside a text region, prior to
/// rendering.
///
/// All string fields borrow from the scanned text. `span` is relative to the
/// start of that text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate<'a> {
    /// Byte range of the whole address
    pub span: Range<usize>,
    /// Web or mail address
    pub kind: LinkKind,
    /// The scheme as typed, e.g. `https://` or `HTTP://`
    pub scheme: Option<&'a str>,
    /// Credentials in front of the host (for mail addresses, the local part)
    pub userinfo: Option<Userinfo<'a>>,
    /// Domain name or IPv4 address
    pub host: &'a str,
    /// `true` if the host is a dotted quad
    pub host_is_ipv4: bool,
    /// Port, path, query and fragment
    pub suffix: Suffix<'a>,
    /// Where the link points to.
    ///
    /// For URLs this is the scheme (`http://` if none was typed) followed by
    /// the matched address. For mail addresses it is the bare address.
    pub target: Cow<'a, str>,
    /// What the link shows.
    ///
    /// For URLs this is host, port and path; credentials, query and fragment
    /// are dropped. For mail addresses it is the bare address.
    pub display: &'a str,
}

impl Candidate<'_> {
    /// Returns `true` if this is a mail address
    #[inline]
    #[must_use]
    pub const fn is_email(&self) -> bool {
        matches!(self.kind, LinkKind::Email)
    }
}
