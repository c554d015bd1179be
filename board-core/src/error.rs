use crate::store::StoreError;
use thiserror::Error;

/// Global error type for the board core.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Failed to read or merge configuration sources.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration values that parsed but make no sense.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The store actor is gone; no more intents can be delivered.
    #[error("Store is closed")]
    StoreClosed,

    /// The store refused an intent.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A token collection could not be built.
    #[error("Token error: {0}")]
    Token(#[from] board::TokenError),

    /// An inbound feed message could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A feed message decoded to something other than a price update.
    #[error("Feed delivered a {0} intent, only UpdatePrice is accepted")]
    UnexpectedIntent(&'static str),
}

/// A specialized Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
