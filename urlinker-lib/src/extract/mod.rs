//! Finding addresses in text and text in HTML.
//!
//! [`markup::scan`] splits trusted HTML into regions that may or may not
//! receive links. [`classify`] finds the addresses inside one text region,
//! using the [`LinkPattern`] compiled for the linker's options.
pub mod markup;

mod classify;
mod pattern;

pub use classify::{DEFAULT_SCHEME, classify};
pub use pattern::LinkPattern;
