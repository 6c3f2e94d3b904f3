//! Where the configuration document is read from.
//!
//! A path such as `./config.json` is resolved the way a page-relative fetch
//! would resolve it: against a base URL for [`HttpSource`], or against the
//! page's directory for [`FileSource`].

use crate::error::RenderError;
use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;
use url::Url;

/// Retrieves the raw configuration text for a relative resource path.
#[async_trait]
pub trait ConfigSource {
    async fn fetch(&self, path: &str) -> Result<String, RenderError>;
}

/// Fetches the configuration over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base: Url) -> Self {
        Self::with_client(base, reqwest::Client::new())
    }

    pub fn with_client(base: Url, client: reqwest::Client) -> Self {
        Self { base, client }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolves `path` against the base URL.
    pub fn resolve(&self, path: &str) -> Result<Url, RenderError> {
        self.base
            .join(path)
            .map_err(|e| RenderError::network(format!("invalid resource url `{}`: {}", path, e)))
    }
}

#[async_trait]
impl ConfigSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, RenderError> {
        let url = self.resolve(path)?;
        debug!("HTTP GET: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RenderError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::network(format!("HTTP {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| RenderError::network(e.to_string()))
    }
}

/// Reads the configuration from disk, relative to a base directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    base_dir: PathBuf,
}

impl FileSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }
}

#[async_trait]
impl ConfigSource for FileSource {
    async fn fetch(&self, path: &str) -> Result<String, RenderError> {
        let full_path = self.resolve(path);
        debug!("reading {}", full_path.display());
        tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|e| RenderError::network(format!("{}: {}", full_path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_source_resolves_like_a_page_relative_fetch() {
        let base = Url::parse("http://example.com/site/index.html").unwrap();
        let source = HttpSource::new(base);
        assert_eq!(
            source.resolve("./config.json").unwrap().as_str(),
            "http://example.com/site/config.json"
        );
        assert_eq!(
            source.resolve("/config.json").unwrap().as_str(),
            "http://example.com/config.json"
        );
    }

    #[test]
    fn file_source_joins_base_dir() {
        let source = FileSource::new("/srv/page");
        assert_eq!(
            source.resolve("./config.json"),
            PathBuf::from("/srv/page/./config.json")
        );
    }

    #[tokio::test]
    async fn missing_file_is_a_network_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());
        let err = source.fetch("./config.json").await.unwrap_err();
        assert!(err.is_network());
    }
}
