//! Price update records.
//!
//! `PriceUpdate` is what any price source (the built-in simulator or a live
//! push transport) hands to the store: the bucket to look in, the token id and
//! the replacement price.

use crate::model::identity::TokenId;
use crate::model::token::{Token, TokenStatus};
use serde::{Deserialize, Serialize};

/// Replacement price for one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    /// The bucket the token lives in.
    pub bucket: TokenStatus,
    /// The token to reprice.
    pub id: TokenId,
    /// The new unit price. Expected to be >= 0.
    pub price: f64,
}

impl PriceUpdate {
    pub fn new(bucket: TokenStatus, id: impl Into<TokenId>, price: f64) -> Self {
        Self {
            bucket,
            id: id.into(),
            price,
        }
    }

    pub fn bucket(&self) -> TokenStatus {
        self.bucket
    }

    pub fn id(&self) -> &TokenId {
        &self.id
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Direction of a price tick between two observations of the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceMove {
    Up,
    Down,
    Flat,
}

impl PriceMove {
    pub fn from_prices(previous: f64, current: f64) -> Self {
        if current > previous {
            PriceMove::Up
        } else if current < previous {
            PriceMove::Down
        } else {
            PriceMove::Flat
        }
    }

    /// Compares two observations of a token. Different tokens are always `Flat`.
    pub fn between(previous: &Token, current: &Token) -> Self {
        if previous.id() != current.id() {
            return PriceMove::Flat;
        }
        Self::from_prices(previous.price(), current.price())
    }
}
