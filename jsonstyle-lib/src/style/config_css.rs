use crate::config::{css_value, Configuration, Declarations};
use crate::error::StyleError;
use crate::style::case::to_css_key;
use crate::style::owned_css::{OwnedDeclaration, OwnedRule, OwnedStylesheet};
use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use log::debug;

/// A named group of declarations in the configuration, tied to one selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleScope {
    Body,
    Header,
    HeaderP,
}

impl StyleScope {
    /// Emission order of the generated rules.
    pub const ALL: [StyleScope; 3] = [StyleScope::Body, StyleScope::Header, StyleScope::HeaderP];

    /// Key of the scope under `styles` in the configuration document.
    pub fn key(self) -> &'static str {
        match self {
            StyleScope::Body => "body",
            StyleScope::Header => "header",
            StyleScope::HeaderP => "headerP",
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            StyleScope::Body => "*",
            StyleScope::Header => "header",
            StyleScope::HeaderP => "header p",
        }
    }

    /// Only `header` property names are written camel-cased in the configuration.
    pub fn converts_keys(self) -> bool {
        matches!(self, StyleScope::Header)
    }

    pub fn declarations(self, config: &Configuration) -> &Declarations {
        match self {
            StyleScope::Body => &config.styles.body,
            StyleScope::Header => &config.styles.header,
            StyleScope::HeaderP => &config.styles.header_p,
        }
    }
}

/// Builds the `*`, `header` and `header p` rules, in that order.
pub fn build_stylesheet(config: &Configuration) -> OwnedStylesheet {
    let rules = StyleScope::ALL
        .iter()
        .map(|&scope| build_rule(scope, scope.declarations(config)))
        .collect();
    OwnedStylesheet { rules }
}

fn build_rule(scope: StyleScope, declarations: &Declarations) -> OwnedRule {
    let mut rule = OwnedRule::new(scope.selector());
    for (key, value) in declarations {
        let property = if scope.converts_keys() {
            to_css_key(key)
        } else {
            key.clone()
        };
        rule.declarations
            .push(OwnedDeclaration::new(property, css_value(value)));
    }
    debug!(
        "built `{}` rule with {} declarations",
        scope.selector(),
        rule.declarations.len()
    );
    rule
}

/// Re-prints CSS text in minified form through LightningCSS.
pub fn minify(css_text: &str) -> Result<String, StyleError> {
    let sheet = StyleSheet::parse(css_text, ParserOptions::default())
        .map_err(|e| StyleError::Parse(e.to_string()))?;
    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| StyleError::Print(e.to_string()))?;
    Ok(printed.code)
}
