use funnelscope_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("category {category} holds {found}, expected {expected}")]
    Shape {
        category: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("rejected record: {0}")]
    Rejected(#[from] CoreError),
}
