use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriChoiceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("case file not found: {0}")]
    CaseNotFound(String),

    #[error("case parse error: {0}")]
    CaseParse(String),

    #[error("refusing to overwrite existing file: {0}")]
    AlreadyExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TriChoiceError>;
