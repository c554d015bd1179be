use crate::model::identity::TokenId;
use crate::model::token::TokenStatus;
use thiserror::Error;

/// Errors raised while building token collections or parsing model values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    /// A token was placed in a bucket that does not match its status.
    #[error("token {id} has status {found} but was placed in the {expected} bucket")]
    StatusMismatch {
        id: TokenId,
        expected: TokenStatus,
        found: TokenStatus,
    },

    /// A decoded token carried a price that is not a finite number.
    #[error("token {id} has a non-finite price {price}")]
    InvalidPrice { id: TokenId, price: f64 },

    /// The same id appears more than once in a working set.
    #[error("duplicate token id {0}")]
    DuplicateId(TokenId),

    /// A string did not name a known sort key.
    #[error("unknown sort key '{0}' (expected recency, change or volume)")]
    UnknownSortKey(String),

    /// A string did not name a known bucket.
    #[error("unknown token status '{0}' (expected new, stretch or migrated)")]
    UnknownStatus(String),
}
