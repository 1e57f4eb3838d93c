/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod cards;
pub mod client;
pub mod customer;
pub mod error;
pub mod login;
pub mod public;
pub mod transactions;

pub use error::{ApiError, FieldError, MoonpayError, Result};

pub use client::{ClientConfig, MoonpayClient, API_BASE_URL, API_VERSION};
pub use customer::CustomerClient;
