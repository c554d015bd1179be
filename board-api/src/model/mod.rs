pub mod generator;
pub mod identity;
pub mod intent;
pub mod market_data;
pub mod sort;
pub mod token;
pub mod working_set;

pub use identity::*;
pub use intent::*;
pub use market_data::*;
pub use sort::*;
pub use token::*;
pub use working_set::*;
