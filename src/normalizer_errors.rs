//! # Normalizer Error Types Module
//!
//! Normalizing a line never fails. The errors defined here only cover setup:
//! reading a lexicon extension, validating configuration and compiling the
//! split patterns built from the lexical tables.

/// Custom error types for normalizer setup
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizerError {
    /// Invalid configuration values
    Config(String),
    /// Lexicon file could not be read
    LexiconIo(String),
    /// Lexicon file content is malformed or contains invalid entries
    LexiconFormat(String),
    /// Split pattern failed to compile
    Pattern(String),
}

/// Result alias used by every fallible setup function
pub type NormalizerResult<T> = Result<T, NormalizerError>;

impl std::fmt::Display for NormalizerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizerError::Config(msg) => write!(f, "Configuration error: {msg}"),
            NormalizerError::LexiconIo(msg) => write!(f, "Lexicon read error: {msg}"),
            NormalizerError::LexiconFormat(msg) => write!(f, "Lexicon format error: {msg}"),
            NormalizerError::Pattern(msg) => write!(f, "Pattern error: {msg}"),
        }
    }
}

impl std::error::Error for NormalizerError {}

impl From<std::io::Error> for NormalizerError {
    fn from(err: std::io::Error) -> Self {
        NormalizerError::LexiconIo(err.to_string())
    }
}

impl From<serde_json::Error> for NormalizerError {
    fn from(err: serde_json::Error) -> Self {
        NormalizerError::LexiconFormat(err.to_string())
    }
}

impl From<regex::Error> for NormalizerError {
    fn from(err: regex::Error) -> Self {
        NormalizerError::Pattern(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = NormalizerError::Config("fraction_scale must be at most 28".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: fraction_scale must be at most 28"
        );

        let err = NormalizerError::LexiconIo("missing".to_string());
        assert!(err.to_string().starts_with("Lexicon read error"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: NormalizerError = json_err.into();
        assert!(matches!(err, NormalizerError::LexiconFormat(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: NormalizerError = io_err.into();
        assert_eq!(err, NormalizerError::LexiconIo("no such file".to_string()));
    }
}
