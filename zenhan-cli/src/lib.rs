//! zenhan-cli: command-line front end for zenhan-engine
//!
//! Holds the user configuration and logging setup shared by the `zenhan` binary.

pub mod config;
pub mod logging;
pub mod stream;

pub use config::Settings;
