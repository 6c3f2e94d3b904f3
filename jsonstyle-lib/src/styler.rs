//! The render cycle: fetch the configuration, build CSS, write it into the page.

use crate::config::Configuration;
use crate::dom::dom_tree::{self, Document, Node};
use crate::error::RenderError;
use crate::parser::dom_indices::DomIndices;
use crate::source::ConfigSource;
use crate::style::{build_stylesheet, minify};
use log::{debug, error};
use std::cell::RefCell;
use std::rc::Rc;

/// Resource path requested when none is configured.
pub const DEFAULT_CONFIG_PATH: &str = "./config.json";
/// Id of the element whose content receives the generated CSS.
pub const DEFAULT_STYLE_BLOCK_ID: &str = "style-block";
/// Id of the element whose text receives `content.headerText`.
pub const DEFAULT_HEADER_TEXT_ID: &str = "header-text";

/// The two elements a render cycle writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTargets {
    pub style_block_id: String,
    pub header_text_id: String,
}

impl Default for StyleTargets {
    fn default() -> Self {
        Self {
            style_block_id: DEFAULT_STYLE_BLOCK_ID.to_string(),
            header_text_id: DEFAULT_HEADER_TEXT_ID.to_string(),
        }
    }
}

/// What a successful render cycle wrote into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub css: String,
    pub header_text: String,
}

/// Applies a JSON configuration to a page.
pub struct ConfigStyler<S> {
    source: S,
    config_path: String,
    targets: StyleTargets,
    minify: bool,
}

impl<S: ConfigSource> ConfigStyler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            targets: StyleTargets::default(),
            minify: false,
        }
    }

    pub fn with_config_path(mut self, path: impl Into<String>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn with_targets(mut self, targets: StyleTargets) -> Self {
        self.targets = targets;
        self
    }

    /// Emit minified CSS instead of the one-line `selector { k: v; }` form.
    pub fn minified(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn targets(&self) -> &StyleTargets {
        &self.targets
    }

    /// Runs one fetch, parse, build and apply cycle.
    ///
    /// On error the page is left untouched.
    pub async fn render(&self, document: &Document) -> Result<RenderReport, RenderError> {
        let body = self.source.fetch(&self.config_path).await?;
        let config = Configuration::from_json(&body)?;
        debug!("loaded configuration from {}", self.config_path);

        let mut css = build_stylesheet(&config).to_string();
        if self.minify {
            css = minify(&css)?;
        }

        apply(document, &self.targets, &css, &config.content.header_text)?;
        Ok(RenderReport {
            css,
            header_text: config.content.header_text,
        })
    }

    /// Runs [`render`](Self::render) and logs a failure instead of returning it.
    pub async fn render_json(&self, document: &Document) {
        self.render_json_with(document, |err| {
            error!("failed to fetch the JSON configuration: {}", err);
        })
        .await
    }

    /// Runs [`render`](Self::render) and hands a failure to `on_error`.
    pub async fn render_json_with<F>(&self, document: &Document, on_error: F)
    where
        F: FnOnce(&RenderError),
    {
        if let Err(err) = self.render(document).await {
            on_error(&err);
        }
    }
}

/// Writes `css` into the style block and `header_text` into the header element.
///
/// Both targets are looked up, and the CSS checked, before either is modified.
pub fn apply(
    document: &Document,
    targets: &StyleTargets,
    css: &str,
    header_text: &str,
) -> Result<(), RenderError> {
    if closes_style_element(css) {
        return Err(RenderError::UnsafeStyleText);
    }
    let indices = DomIndices::build(document);
    let style_block = find_element(&indices, &targets.style_block_id)?;
    let header = find_element(&indices, &targets.header_text_id)?;

    dom_tree::set_text_content(&style_block, css);
    dom_tree::set_text_content(&header, header_text);
    debug!(
        "updated #{} and #{}",
        targets.style_block_id, targets.header_text_id
    );
    Ok(())
}

/// Raw text inside `<style>` ends at the first case-insensitive `</style`.
fn closes_style_element(css: &str) -> bool {
    css.to_ascii_lowercase().contains("</style")
}

fn find_element(indices: &DomIndices, id: &str) -> Result<Rc<RefCell<Node>>, RenderError> {
    indices
        .id_map
        .get(id)
        .cloned()
        .ok_or_else(|| RenderError::MissingElement(id.to_string()))
}
