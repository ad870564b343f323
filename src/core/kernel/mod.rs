//! Transport kernel shared by all exchange connectors.
//!
//! The kernel contains no exchange-specific logic: it exposes a
//! [`RestClient`] trait over HTTP plus a pluggable [`Signer`] trait for
//! vendor authentication schemes. Each exchange module supplies its own
//! signer; connectors stay generic over the transport so tests can drive
//! them with stubs.

pub mod rest;
pub mod signer;

pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{NoopSigner, RequestBody, SignatureResult, SignedRequest, Signer};
