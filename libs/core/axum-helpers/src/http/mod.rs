//! HTTP middleware shared across services.

pub mod security;

pub use security::security_headers;
