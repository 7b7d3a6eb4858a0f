#![allow(unreachable_pub)]

mod candidate;
mod error;
mod options;
mod region;

pub use candidate::{Candidate, LinkKind, Suffix, Userinfo};
pub use error::{BoxError, ErrorKind};
pub use options::{
    ALLOW_FTP_ADDRESSES, ALLOW_UPPER_CASE_URL_SCHEMES, EMAIL_LINK_CREATOR, HTML_LINK_CREATOR,
    Options, VALID_TLDS,
};
pub use region::{Region, RegionKind};

/// The urlinker `Result` type
pub type Result<T> = std::result::Result<T, crate::ErrorKind>;
