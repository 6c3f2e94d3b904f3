pub mod case;
pub mod config_css;
pub mod owned_css;

pub use case::{to_css_key, to_css_key_with};
pub use config_css::{build_stylesheet, minify, StyleScope};
pub use owned_css::{OwnedDeclaration, OwnedRule, OwnedStylesheet};
