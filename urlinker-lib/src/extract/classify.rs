use std::borrow::Cow;

use fancy_regex::{Captures, Match};

use super::pattern::LinkPattern;
use crate::{
    tld::TldSet,
    types::{Candidate, LinkKind, Suffix, Userinfo},
};

/// Scheme put in front of addresses typed without one
pub const DEFAULT_SCHEME: &str = "http://";

/// Find all web and mail addresses in a piece of text.
///
/// Candidates are returned in order and never overlap. A match whose host
/// ends in an unknown top-level domain is dropped, and so is the text it
/// covered: nothing inside it is looked at again.
///
/// ```
/// use urlinker_lib::{Options, extract::{LinkPattern, classify}, tld};
///
/// let pattern = LinkPattern::build(&Options::default()).unwrap();
/// let found = classify("Visit example.com or write to bob@example.org.", &pattern, &tld::load());
///
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].target, "http://example.com");
/// assert!(found[1].is_email());
/// ```
#[must_use]
pub fn classify<'a>(text: &'a str, pattern: &LinkPattern, valid_tlds: &TldSet) -> Vec<Candidate<'a>> {
    let mut candidates = Vec::new();

    // Every address we recognize has a dot in its host
    if !text.contains('.') {
        return candidates;
    }

    let mut pos = 0;
    while pos < text.len() {
        let captures = match pattern.captures_from_pos(text, pos) {
            Ok(Some(captures)) => captures,
            Ok(None) => break,
            Err(e) => {
                // Addresses never contain whitespace, so the next word is a
                // fresh start
                let Some(next) = after_next_whitespace(text, pos) else {
                    log::warn!("Stopped looking for links at byte {pos}: {e}");
                    break;
                };
                log::warn!("Skipping bytes {pos}..{next} while looking for links: {e}");
                pos = next;
                continue;
            }
        };
        let Some(whole) = captures.get(0) else {
            break;
        };

        match decide(text, &captures, whole, valid_tlds) {
            Decision::Accept(candidate) => {
                pos = candidate.span.end;
                candidates.push(candidate);
            }
            Decision::Skip => pos = whole.end(),
            Decision::ResumeAt(next) => pos = next,
        }
    }

    candidates
}

enum Decision<'a> {
    Accept(Candidate<'a>),
    /// Not an address; continue after the whole match
    Skip,
    /// Not an address; continue at the given offset inside the match
    ResumeAt(usize),
}

fn decide<'a>(
    text: &'a str,
    captures: &Captures<'a>,
    whole: Match<'a>,
    valid_tlds: &TldSet,
) -> Decision<'a> {
    if let Some(email) = captures.name("email") {
        return email_candidate(email, valid_tlds).map_or(Decision::Skip, Decision::Accept);
    }

    let Some(host) = captures.name("host") else {
        return Decision::Skip;
    };
    let scheme = captures.name("scheme").map(|m| m.as_str());
    let username = captures.name("username");
    let password = captures.name("password").map(|m| m.as_str());

    // `my email:bob@example.com` is a label followed by a mail address,
    // not a URL with credentials
    if scheme.is_none()
        && password.is_some()
        && let Some(username) = username
    {
        log::trace!(
            "`{}` has credentials but no scheme, resuming after `{}`",
            whole.as_str(),
            username.as_str()
        );
        return Decision::ResumeAt(username.end());
    }

    let host_is_ipv4 = captures.name("ipv4").is_some();
    if !host_is_ipv4 && !has_valid_tld(host.as_str(), valid_tlds) {
        log::trace!("Skipping `{}`: unknown top-level domain", whole.as_str());
        return Decision::Skip;
    }

    let port = captures.name("port");
    let path = captures.name("path");
    let suffix = Suffix {
        port: port.map(|m| m.as_str()),
        path: path.map(|m| m.as_str()),
        query: captures.name("query").map(|m| m.as_str()),
        fragment: captures.name("fragment").map(|m| m.as_str()),
    };

    let userinfo = username.map(|username| Userinfo {
        username: username.as_str(),
        password,
    });

    if scheme.is_none()
        && userinfo.is_some()
        && password.is_none()
        && suffix.is_empty()
        && !host_is_ipv4
    {
        return Decision::Accept(Candidate {
            span: whole.range(),
            kind: LinkKind::Email,
            scheme: None,
            userinfo,
            host: host.as_str(),
            host_is_ipv4,
            suffix,
            target: Cow::Borrowed(whole.as_str()),
            display: whole.as_str(),
        });
    }

    let target = match scheme {
        Some(_) => Cow::Borrowed(whole.as_str()),
        None => Cow::Owned(format!("{DEFAULT_SCHEME}{}", whole.as_str())),
    };
    let display_end = path.or(port).map_or(host.end(), |m| m.end());

    Decision::Accept(Candidate {
        span: whole.range(),
        kind: LinkKind::Url,
        scheme,
        userinfo,
        host: host.as_str(),
        host_is_ipv4,
        suffix,
        target,
        display: &text[host.start()..display_end],
    })
}

fn email_candidate<'a>(email: Match<'a>, valid_tlds: &TldSet) -> Option<Candidate<'a>> {
    let address = email.as_str();
    let (local, domain) = address.split_once('@')?;
    if !has_valid_tld(domain, valid_tlds) {
        log::trace!("Skipping `{address}`: unknown top-level domain");
        return None;
    }

    Some(Candidate {
        span: email.range(),
        kind: LinkKind::Email,
        scheme: None,
        userinfo: Some(Userinfo {
            username: local,
            password: None,
        }),
        host: domain,
        host_is_ipv4: false,
        suffix: Suffix::default(),
        target: Cow::Borrowed(address),
        display: address,
    })
}

/// Byte offset right after the first whitespace at or after `pos`
fn after_next_whitespace(text: &str, pos: usize) -> Option<usize> {
    text[pos..]
        .char_indices()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| pos + i + c.len_utf8())
}

/// Check the last `.label` of a host against the set of known TLDs
fn has_valid_tld(host: &str, valid_tlds: &TldSet) -> bool {
    host.rfind('.')
        .is_some_and(|dot| valid_tlds.contains(&host[dot..]))
}
