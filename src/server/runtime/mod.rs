//! HTTP server startup and shutdown wiring.
mod startup;

pub use startup::{run_server, RuntimeExit};
