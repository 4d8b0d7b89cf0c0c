//! Workspace-level integration tests for the Ark MCP servers.
//!
//! These tests verify:
//! - The video server builds from configuration and advertises its capabilities
//! - Tool schema generation for the `generate_video` tool
//! - Input validation and tool output format, including property-based checks

pub mod server_startup;
pub mod tool_schema;
pub mod input_validation;
pub mod output_format;
