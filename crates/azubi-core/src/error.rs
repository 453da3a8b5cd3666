use thiserror::Error;

#[derive(Debug, Error)]
pub enum AzubiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown option for {field}: {option}")]
    UnknownOption { field: String, option: String },

    #[error("unknown trade: {0}")]
    UnknownTrade(String),

    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("unknown document kind: {0}")]
    UnknownKind(String),
}
