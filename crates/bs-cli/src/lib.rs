//! Bikeshare explorer CLI library.
//!
//! This crate provides the interactive interface over `bs-core`.

mod cli;
mod config;
pub mod render;
pub mod session;

pub use cli::Cli;
pub use config::Config;
pub use session::Session;
