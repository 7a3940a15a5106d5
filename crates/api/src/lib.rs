//! HTTP API: routing, handlers, and error translation for customer lookups.

pub mod app;
pub mod middleware;
