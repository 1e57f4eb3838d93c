/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public MoonPay adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{EmailLogin, LoginState, Session, SessionData};

// Re-export commonly used types from http
pub use http::{
    ApiError,
    API_BASE_URL,
    API_VERSION,
    ClientConfig,
    CustomerClient,
    FieldError,
    MoonpayClient,
    MoonpayError,
    Result,
};

// Re-export all types
pub use types::*;
