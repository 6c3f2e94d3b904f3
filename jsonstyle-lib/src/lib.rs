//! Applies a JSON style configuration to an HTML page.
//!
//! A render cycle fetches a configuration document (`./config.json` by default),
//! builds three CSS rules from its `styles` scopes, writes them into the
//! `#style-block` element and writes `content.headerText` into `#header-text`.

pub mod config;
pub mod dom;
pub mod error;
pub mod parser;
pub mod source;
pub mod style;
pub mod styler;

pub use config::Configuration;
pub use error::{RenderError, StyleError};
pub use source::{ConfigSource, FileSource, HttpSource};
pub use styler::{ConfigStyler, RenderReport, StyleTargets};
