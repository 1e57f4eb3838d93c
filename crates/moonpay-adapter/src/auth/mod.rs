/*
[INPUT]:  Customer email login and bearer tokens
[OUTPUT]: Customer sessions and the login state machine
[POS]:    Auth layer - handles MoonPay customer authentication
[UPDATE]: When auth flow or session handling change
*/

pub mod flow;
pub mod session;

pub use flow::{EmailLogin, LoginState};
pub use session::{Session, SessionData};
