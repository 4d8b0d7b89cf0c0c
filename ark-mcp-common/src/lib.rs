//! Ark MCP Common Library
//!
//! Shared configuration, error handling, model definitions, tracing and
//! server/transport plumbing for the Volcengine Ark MCP servers.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod tracing;
pub mod transport;

#[cfg(test)]
mod error_test;

pub use config::Config;
pub use error::{ConfigError, Error, Result};
pub use server::{McpServerBuilder, ServerError, shutdown_channel};
pub use transport::{Transport, TransportArgs, TransportMode};
