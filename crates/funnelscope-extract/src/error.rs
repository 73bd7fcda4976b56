use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file type for {path}: only .txt and .md files can be read")]
    UnsupportedFormat { path: String },

    #[error("no text content found in {source_label}")]
    Empty { source_label: String },

    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
}
