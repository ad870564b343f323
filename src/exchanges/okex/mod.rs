pub mod builder;
pub mod connector;
pub mod conversions;
pub mod rest;
pub mod signer;
pub mod types;

pub use builder::OkexBuilder;
pub use connector::{Account, OkexConnector, Trading};
pub use signer::OkexSigner;
pub use types::{OkexBalanceReturn, OkexCancelReturn, OkexOrder, OkexOrderInfoReturn, OkexPlaceReturn};
