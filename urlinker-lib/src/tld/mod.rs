//! Registry of recognized top-level domains.
//!
//! The table is built from the embedded list on first use and shared by all
//! linkers in the process. Internationalized TLDs are stored in their ASCII
//! (`xn--`) form.
//!
//! `tlds.txt` holds the top-level entries of the ICANN section of the Public
//! Suffix List as of 2023-02-09 (1490 entries). Older snapshots have fewer
//! entries, e.g. 1440.
use std::{
    borrow::Cow,
    collections::HashSet,
    sync::{Arc, PoisonError, RwLock},
};

/// One suffix per line, lowercase, with a leading dot.
const TLD_TABLE: &str = include_str!("tlds.txt");

static VALID_TLDS: RwLock<Option<Arc<TldSet>>> = RwLock::new(None);

/// A set of top-level domain suffixes.
///
/// Suffixes are stored lowercase with a leading dot (`.com`); lookups are
/// case-insensitive and accept the suffix with or without the dot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TldSet {
    suffixes: HashSet<String>,
}

impl TldSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a suffix. Returns `false` if it was already present.
    pub fn insert(&mut self, suffix: &str) -> bool {
        self.suffixes.insert(normalize(suffix).into_owned())
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, suffix: &str) -> bool {
        self.suffixes.contains(normalize(suffix).as_ref())
    }

    /// Number of suffixes in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Returns `true` if the set holds no suffix at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Iterate over the normalized suffixes in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for TldSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for suffix in iter {
            self.insert(suffix.as_ref());
        }
    }
}

fn normalize(suffix: &str) -> Cow<'_, str> {
    let needs_dot = !suffix.starts_with('.');
    if !needs_dot && !suffix.chars().any(char::is_uppercase) {
        return Cow::Borrowed(suffix);
    }
    let lower = suffix.to_lowercase();
    if needs_dot {
        Cow::Owned(format!(".{lower}"))
    } else {
        Cow::Owned(lower)
    }
}

fn build() -> TldSet {
    let set: TldSet = TLD_TABLE
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    log::debug!("Loaded {} top-level domains", set.len());
    set
}

/// Returns the table of recognized top-level domains.
///
/// The table is built once and cached. When two threads race on the first
/// call both may build it, but only one table is ever published.
pub fn load() -> Arc<TldSet> {
    if let Some(tlds) = VALID_TLDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
    {
        return Arc::clone(tlds);
    }

    let built = Arc::new(build());
    let mut cached = VALID_TLDS.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(cached.get_or_insert(built))
}

/// Check a suffix like `.com` or `COM` against the built-in table
#[must_use]
pub fn is_valid_tld(suffix: &str) -> bool {
    load().contains(suffix)
}

/// Drop the cached table so the next [`load`] builds it again.
#[cfg(test)]
pub(crate) fn reset() {
    *VALID_TLDS.write().unwrap_or_else(PoisonError::into_inner) = None;
}
