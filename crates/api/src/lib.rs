//! HTTP API: routing, session guard, and request/response mapping.

pub mod app;
pub mod context;
pub mod middleware;
