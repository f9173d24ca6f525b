/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod currency;
pub mod endpoint;
pub mod error;
pub mod exchange;
mod request;

pub use error::{ErrorOrigin, Result, SimpleSwapError};
pub use endpoint::Endpoint;

pub use client::{ClientConfig, SimpleSwapClient};
