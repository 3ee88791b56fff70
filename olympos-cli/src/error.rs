//! Error handling for the CLI application

use thiserror::Error;

/// Custom error type for CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file not found or inaccessible
    #[error("file not found: {0}")]
    FileNotFound(String),
    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
    /// The document has no sentence mentioning the topic keyword
    #[error("no sentences matched the topic keyword '{keyword}'")]
    NoMatches {
        /// The keyword that was searched for
        keyword: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("iliad.txt".to_string());
        assert_eq!(error.to_string(), "file not found: iliad.txt");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("timeout_secs must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "configuration error: timeout_secs must be greater than 0"
        );
    }

    #[test]
    fn test_no_matches_error_display() {
        let error = CliError::NoMatches {
            keyword: "olymp".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "no sentences matched the topic keyword 'olymp'"
        );
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("Ἰλιάς/βιβλίο α.txt".to_string());
        assert_eq!(error.to_string(), "file not found: Ἰλιάς/βιβλίο α.txt");
    }
}
