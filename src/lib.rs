//! Library crate root re-exporting server, protocol, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod protocol;
pub mod server;
