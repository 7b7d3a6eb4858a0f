use std::error::Error;

use thiserror::Error;

/// Boxed error raised from inside a user-supplied link renderer.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Possible errors when linking text with `urlinker_lib`
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An option was supplied with a value of the wrong kind,
    /// e.g. a string where a boolean was required.
    #[error(r#"Option "{option}" must be of type "{expected}", "{actual}" given."#)]
    ConfigurationType {
        /// Name of the offending option as it appears in the configuration map
        option: &'static str,
        /// The kind of value the option accepts
        expected: &'static str,
        /// The kind of value that was actually given
        actual: String,
    },
    /// The configuration text could not be parsed at all
    #[error("Cannot parse configuration: {0}")]
    ConfigurationParse(#[from] toml::de::Error),
    /// A link renderer returned something that is not markup
    #[error(r#"Return value of the link renderer for "{option}" must be of type "string", "{actual}" given."#)]
    ContractViolation {
        /// Name of the renderer option (`htmlLinkCreator` or `emailLinkCreator`)
        option: &'static str,
        /// The type the renderer produced instead
        actual: &'static str,
    },
    /// An error raised by a user-supplied link renderer, passed through as-is
    #[error(transparent)]
    Renderer(BoxError),
    /// The link pattern could not be compiled
    #[error("Cannot compile link pattern: {0}")]
    Pattern(#[from] Box<fancy_regex::Error>),
}

impl ErrorKind {
    /// Returns the renderer error if this error was raised by a link renderer.
    #[must_use]
    pub fn renderer_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Renderer(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<fancy_regex::Error> for ErrorKind {
    fn from(e: fancy_regex::Error) -> Self {
        Self::Pattern(Box::new(e))
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::ConfigurationType {
                    option: o1,
                    expected: e1,
                    actual: a1,
                },
                Self::ConfigurationType {
                    option: o2,
                    expected: e2,
                    actual: a2,
                },
            ) => o1 == o2 && e1 == e2 && a1 == a2,
            (
                Self::ContractViolation {
                    option: o1,
                    actual: a1,
                },
                Self::ContractViolation {
                    option: o2,
                    actual: a2,
                },
            ) => o1 == o2 && a1 == a2,
            (Self::ConfigurationParse(e1), Self::ConfigurationParse(e2)) => {
                e1.to_string() == e2.to_string()
            }
            (Self::Renderer(e1), Self::Renderer(e2)) => e1.to_string() == e2.to_string(),
            (Self::Pattern(e1), Self::Pattern(e2)) => e1.to_string() == e2.to_string(),
            _ => false,
        }
    }
}
