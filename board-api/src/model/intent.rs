//! The closed set of requests that may change board state.
//!
//! Intents are the entire write surface of the store. They serialize as tagged
//! records (`{"type": "UpdatePrice", "payload": {...}}`) so a transport can
//! decode them straight off the wire.

use crate::model::identity::TokenId;
use crate::model::market_data::PriceUpdate;
use crate::model::sort::SortKey;
use crate::model::token::TokenStatus;
use crate::model::working_set::WorkingSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Intent {
    /// One-time population of all three buckets. Marks the board ready.
    BulkLoad(WorkingSet),
    /// Replace the price of one token in one bucket.
    UpdatePrice(PriceUpdate),
    /// Put a token under inspection, or clear the selection with `None`.
    Select(Option<TokenId>),
    SetSortKey(SortKey),
    /// Substring filter, applied verbatim. Empty means no filtering.
    SetFilterText(String),
}

impl Intent {
    pub fn update_price(bucket: TokenStatus, id: impl Into<TokenId>, price: f64) -> Self {
        Intent::UpdatePrice(PriceUpdate::new(bucket, id, price))
    }

    pub fn select(id: impl Into<TokenId>) -> Self {
        Intent::Select(Some(id.into()))
    }

    pub fn clear_selection() -> Self {
        Intent::Select(None)
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::BulkLoad(_) => "BulkLoad",
            Intent::UpdatePrice(_) => "UpdatePrice",
            Intent::Select(_) => "Select",
            Intent::SetSortKey(_) => "SetSortKey",
            Intent::SetFilterText(_) => "SetFilterText",
        }
    }
}
