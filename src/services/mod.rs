pub mod auth_service;
pub mod http;
pub mod inactivity_monitor;
pub mod session_store;

pub use auth_service::*;
pub use http::*;
pub use inactivity_monitor::*;
pub use session_store::*;
