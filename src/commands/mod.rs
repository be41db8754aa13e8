//! Command implementations for the CLI
//!
//! - start: Start the HTTP server
//! - test: Test configuration validity
//! - config: Configuration display and validation
//! - quote: Price a requirement file offline

pub mod config;
pub mod quote;
pub mod start;
