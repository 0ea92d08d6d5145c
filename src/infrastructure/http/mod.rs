//! HTTP access to the remote bridge endpoints.

pub mod apex_client;

pub use apex_client::*;
