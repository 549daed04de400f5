//! handlers/mod.rs
pub mod page_handler;
pub mod service_request_handler;
