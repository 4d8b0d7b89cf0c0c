//! Ark MCP Video Server Library
//!
//! This library provides video generation through Volcengine Ark Seedance
//! content generation tasks.

pub mod handler;
pub mod resources;
pub mod server;

pub use handler::{PollConfig, ToolResult, VideoGenerateParams, VideoGenerateResult, VideoHandler};
pub use server::{GenerateVideoToolParams, VideoServer};
