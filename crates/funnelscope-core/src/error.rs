use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid funnel stage: {0}")]
    InvalidStage(String),

    #[error("invalid asset type: {0}")]
    InvalidAssetType(String),

    #[error("invalid persona: {0}")]
    InvalidPersona(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read persona file {path}: {source}")]
    PersonaFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse persona YAML: {0}")]
    PersonaFileParse(#[from] serde_yaml::Error),

    #[error("malformed persona CSV at line {line}: {reason}")]
    PersonaCsv { line: u64, reason: String },

    #[error("failed to read persona spreadsheet {path}: {reason}")]
    PersonaSpreadsheet { path: String, reason: String },

    #[error("persona file has no '{0}' column")]
    MissingPersonaColumn(&'static str),

    #[error("unsupported persona file format: {0}")]
    UnsupportedPersonaFormat(String),

    #[error("validation error: {0}")]
    Validation(String),
}
