//! HTTP server modules: configuration, dispatch, routing, and runtime wiring.

pub mod config;
pub mod descriptor;
pub mod dispatch;
pub mod router;
pub mod runtime;
