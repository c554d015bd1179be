pub mod error;
pub mod format;
pub mod model;

pub use error::TokenError;
pub use model::identity::TokenId;
pub use model::intent::Intent;
pub use model::market_data::{PriceMove, PriceUpdate};
pub use model::sort::SortKey;
pub use model::token::{Token, TokenStatus};
pub use model::working_set::WorkingSet;

pub mod prelude {
    pub use crate::format::{format_compact, format_currency};
    pub use crate::model::generator::generate_token;
    pub use crate::model::identity::TokenId;
    pub use crate::model::intent::Intent;
    pub use crate::model::market_data::{PriceMove, PriceUpdate};
    pub use crate::model::sort::SortKey;
    pub use crate::model::token::{Token, TokenStatus};
    pub use crate::model::working_set::WorkingSet;
}
