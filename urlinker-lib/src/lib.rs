//! `urlinker` turns bare web and mail addresses into HTML links.
//!
//! Untrusted plain text is HTML-escaped, except for the links that get
//! inserted:
//!
//! ```
//! use urlinker_lib::{Result, UrlLinker};
//!
//! fn main() -> Result<()> {
//!   let linker = UrlLinker::default();
//!   let html = linker.link_urls_and_escape_html("Mail bob@example.com or see <example.com/faq>")?;
//!   assert_eq!(
//!     html,
//!     r#"Mail <a href="mailto:bob&#64;example.com">bob&#64;example.com</a> or see &lt;<a href="http://example.com/faq">example.com/faq</a>&gt;"#
//!   );
//!   Ok(())
//! }
//! ```
//!
//! Trusted HTML is left alone, except for addresses in its text content.
//! Tags, attribute values, character references and existing anchors are
//! never touched. Use [`Options`] to change which addresses are recognized
//! and how links are rendered:
//!
//! ```
//! use urlinker_lib::{Options, Renderer, Result, UrlLinker};
//!
//! fn main() -> Result<()> {
//!   let options = Options::builder()
//!     .allow_ftp_addresses(true)
//!     .html_link_creator(Renderer::template(r#"<a href="{href}" rel="nofollow">{content}</a>"#))
//!     .build();
//!   let linker = UrlLinker::new(options)?;
//!   let html = linker.link_urls_in_trusted_html(r#"<p class="x">ftp://example.com</p>"#)?;
//!   assert_eq!(
//!     html,
//!     r#"<p class="x"><a href="ftp://example.com" rel="nofollow">example.com</a></p>"#
//!   );
//!   Ok(())
//! }
//! ```
#![warn(clippy::all, clippy::pedantic)]
#![warn(
    absolute_paths_not_starting_with_crate,
    rustdoc::invalid_html_tags,
    missing_copy_implementations,
    missing_debug_implementations,
    semicolon_in_expressions_from_macros,
    unreachable_pub,
    unused_extern_crates,
    variant_size_differences,
    clippy::missing_const_for_fn
)]
#![deny(anonymous_parameters, macro_use_extern_crate)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod helpers;
mod linker;
mod types;

pub mod extract;
pub mod render;
pub mod tld;

pub use linker::UrlLinker;
pub use render::{IntoLinkOutput, LinkOutput, LinkRenderer, Renderer};
pub use tld::TldSet;
pub use types::*;
