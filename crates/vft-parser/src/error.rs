//! Parser error types for vft-parser.

/// Errors that can occur while reading and scanning Swift sources.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
