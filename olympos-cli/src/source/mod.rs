//! Source document acquisition
//!
//! The pipeline never triggers network activity itself: the caller picks a
//! [`DocumentSource`], loads it into a [`RawDocument`], and only then runs
//! the pipeline.

pub mod http;

pub use http::{FetchError, HttpFetcher};

use crate::error::CliError;
use anyhow::{Context, Result};
use olympos_core::{Input, RawDocument};
use std::io;
use std::path::PathBuf;

/// Fetch-text-by-URL collaborator
pub trait DocumentFetcher {
    /// Download the document at `url`
    fn fetch(&self, url: &str) -> Result<RawDocument, FetchError>;
}

/// Where the raw document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Remote plain-text document
    Url(String),
    /// Local file
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl DocumentSource {
    /// Pick the source: a local input (`-` for stdin) wins over a URL
    pub fn select(input: Option<&PathBuf>, url: &str) -> Self {
        match input {
            Some(path) if path.as_os_str() == "-" => DocumentSource::Stdin,
            Some(path) => DocumentSource::File(path.clone()),
            None => DocumentSource::Url(url.to_string()),
        }
    }

    /// Get the display name for the source
    pub fn display_name(&self) -> String {
        match self {
            DocumentSource::Url(url) => format!("URL: {url}"),
            DocumentSource::File(path) => format!("File: {}", path.display()),
            DocumentSource::Stdin => "Standard input".to_string(),
        }
    }

    /// True when loading needs the network
    pub fn is_remote(&self) -> bool {
        matches!(self, DocumentSource::Url(_))
    }

    /// Load the raw document.
    ///
    /// `make_fetcher` is only called for URL sources, so local reads never
    /// set up a network client.
    pub fn load<F, M>(&self, make_fetcher: M) -> Result<RawDocument>
    where
        F: DocumentFetcher,
        M: FnOnce() -> Result<F>,
    {
        match self {
            DocumentSource::Url(url) => make_fetcher()?
                .fetch(url)
                .with_context(|| format!("Failed to fetch document: {url}")),
            DocumentSource::File(path) => {
                if !path.is_file() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                Input::from_file(path)
                    .into_document()
                    .with_context(|| format!("Failed to read file: {}", path.display()))
            }
            DocumentSource::Stdin => Input::from_reader(io::stdin())
                .into_document()
                .context("Failed to read standard input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;

    struct StubFetcher(Result<&'static str, u16>);

    impl DocumentFetcher for StubFetcher {
        fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
            match self.0 {
                Ok(text) => Ok(RawDocument::from(text)),
                Err(status) => Err(FetchError::Status {
                    url: url.to_string(),
                    status,
                }),
            }
        }
    }

    #[test]
    fn test_select_prefers_input() {
        let path = PathBuf::from("iliad.txt");
        assert_eq!(
            DocumentSource::select(Some(&path), "https://example.com"),
            DocumentSource::File(path)
        );
        assert_eq!(
            DocumentSource::select(Some(&PathBuf::from("-")), "https://example.com"),
            DocumentSource::Stdin
        );
        assert_eq!(
            DocumentSource::select(None, "https://example.com"),
            DocumentSource::Url("https://example.com".to_string())
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            DocumentSource::Url("https://example.com/a.txt".to_string()).display_name(),
            "URL: https://example.com/a.txt"
        );
        assert_eq!(
            DocumentSource::File(PathBuf::from("a.txt")).display_name(),
            "File: a.txt"
        );
        assert_eq!(DocumentSource::Stdin.display_name(), "Standard input");
        assert!(DocumentSource::Url(String::new()).is_remote());
        assert!(!DocumentSource::Stdin.is_remote());
    }

    #[test]
    fn test_load_url_through_fetcher() {
        let source = DocumentSource::Url("https://example.com/iliad.txt".to_string());
        let doc = source.load(|| Ok(StubFetcher(Ok("Olympus.")))).unwrap();
        assert_eq!(doc.as_str(), "Olympus.");
    }

    #[test]
    fn test_fetch_failure_keeps_context() {
        let source = DocumentSource::Url("https://example.com/missing.txt".to_string());
        let err = source.load(|| Ok(StubFetcher(Err(404)))).unwrap_err();
        assert!(err
            .to_string()
            .contains("Failed to fetch document: https://example.com/missing.txt"));
        assert!(err.downcast_ref::<FetchError>().is_some());
    }

    #[test]
    fn test_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("iliad.txt");
        fs::write(&path, "Olympian Zeus.\r\n").unwrap();

        let fetcher_built = Cell::new(false);
        let doc = DocumentSource::File(path)
            .load(|| {
                fetcher_built.set(true);
                Ok(StubFetcher(Err(500)))
            })
            .unwrap();
        assert_eq!(doc.as_str(), "Olympian Zeus.\r\n");
        assert!(!fetcher_built.get());
    }

    #[test]
    fn test_fetcher_setup_failure_propagates() {
        let source = DocumentSource::Url("https://example.com/iliad.txt".to_string());
        let err = source
            .load(|| -> Result<StubFetcher> { Err(anyhow::anyhow!("no client")) })
            .unwrap_err();
        assert_eq!(err.to_string(), "no client");
    }

    #[test]
    fn test_missing_file() {
        let err = DocumentSource::File(PathBuf::from("/nonexistent/iliad.txt"))
            .load(|| Ok(StubFetcher(Ok(""))))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }
}
