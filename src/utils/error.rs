use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnhancerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Script parse error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Script replay error: {message}")]
    ScriptError { message: String },

    #[error("Page adapter error: {message}")]
    PageError { message: String },
}

pub type Result<T> = std::result::Result<T, EnhancerError>;
