pub mod builder;
pub mod connector;
pub mod conversions;
pub mod rest;
pub mod signer;
pub mod types;

pub use builder::HuobiBuilder;
pub use connector::{Account, HuobiConnector, Trading};
pub use signer::HuobiSigner;
pub use types::{HuobiAccount, HuobiAccountBalance, HuobiBalanceEntry, HuobiOrder, HuobiResponse};
