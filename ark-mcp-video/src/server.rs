//! MCP Server implementation for the Video server.
//!
//! This module provides the MCP server handler that exposes:
//! - `generate_video` tool for Seedance text/image-to-video generation
//! - Resources for models and providers

use crate::handler::{
    DEFAULT_DURATION_SECONDS, DEFAULT_MODEL, DEFAULT_RATIO, DEFAULT_RESOLUTION, ToolResult,
    VideoGenerateParams, VideoHandler,
};
use crate::resources;
use ark_mcp_common::config::Config;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{
        CallToolResult, Content, Implementation, ListResourcesResult, ReadResourceResult,
        ResourceContents, ServerCapabilities, ServerInfo,
    },
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info};

/// Server name reported to MCP clients.
pub const SERVER_NAME: &str = "volcengine-video-mcp";

/// Name of the single tool this server exposes.
pub const GENERATE_VIDEO_TOOL: &str = "generate_video";

/// MCP Server for video generation.
#[derive(Clone)]
pub struct VideoServer {
    handler: Arc<VideoHandler>,
}

/// Tool parameters wrapper for generate_video.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoToolParams {
    /// Text description of the video content
    pub prompt: String,
    /// Model ID (default: doubao-seedance-1-5-pro-251215). Aliases and
    /// custom endpoint ids (ep-...) are accepted.
    #[serde(default)]
    pub model: Option<String>,
    /// Path to save the MP4 file (e.g., ./my-video.mp4)
    pub save_path: String,
    /// Local path to an image to use as the first frame
    #[serde(default)]
    pub reference_file_path: Option<String>,
    /// Video resolution: 480p, 720p, 1080p (default: 720p)
    #[serde(default)]
    pub resolution: Option<String>,
    /// Aspect ratio, e.g. 16:9, 9:16, 1:1 (default: 16:9)
    #[serde(default)]
    pub ratio: Option<String>,
    /// Duration in seconds (default: 5)
    #[serde(default)]
    pub duration: Option<u8>,
}

impl From<GenerateVideoToolParams> for VideoGenerateParams {
    fn from(params: GenerateVideoToolParams) -> Self {
        Self {
            prompt: params.prompt,
            model: params.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            save_path: params.save_path,
            reference_file_path: params.reference_file_path,
            resolution: params.resolution.unwrap_or_else(|| DEFAULT_RESOLUTION.to_string()),
            ratio: params.ratio.unwrap_or_else(|| DEFAULT_RATIO.to_string()),
            duration: params.duration.unwrap_or(DEFAULT_DURATION_SECONDS),
        }
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        let content = vec![Content::text(result.message)];
        if result.success {
            CallToolResult::success(content)
        } else {
            CallToolResult::error(content)
        }
    }
}

impl VideoServer {
    /// Create a new VideoServer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self::with_handler(VideoHandler::new(config))
    }

    /// Create a server around a pre-built handler.
    pub fn with_handler(handler: VideoHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Generate a video. Workflow failures come back as an error result,
    /// not as a protocol error.
    pub async fn generate_video(&self, params: GenerateVideoToolParams) -> CallToolResult {
        info!(prompt = %params.prompt, save_path = %params.save_path, "Generating video");
        self.handler.run(params.into()).await.into()
    }
}

impl ServerHandler for VideoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Video generation server using Volcengine Ark Seedance models. \
                 Use generate_video to create an MP4 from a text prompt and an optional \
                 first-frame image. Requires DOUBAO_API_KEY."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _params: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<rmcp::model::ListToolsResult, McpError>> + Send + '_ {
        async move {
            use rmcp::model::{ListToolsResult, Tool};
            use schemars::schema_for;

            let schema = schema_for!(GenerateVideoToolParams);
            let schema_value = serde_json::to_value(&schema).unwrap_or_default();
            let input_schema = match schema_value {
                serde_json::Value::Object(map) => Arc::new(map),
                _ => Arc::new(serde_json::Map::new()),
            };

            Ok(ListToolsResult {
                tools: vec![Tool {
                    name: Cow::Borrowed(GENERATE_VIDEO_TOOL),
                    description: Some(Cow::Borrowed(
                        "Generate video using Volcengine Seedance. \
                         Submits a generation task, waits for it to finish (up to 2 minutes), \
                         downloads the MP4 and saves it to savePath. \
                         Optionally uses referenceFilePath as the first frame.",
                    )),
                    input_schema,
                    annotations: None,
                    icons: None,
                    meta: None,
                    output_schema: None,
                    title: None,
                }],
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        params: rmcp::model::CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            match params.name.as_ref() {
                GENERATE_VIDEO_TOOL => {
                    let tool_params: GenerateVideoToolParams = params
                        .arguments
                        .map(|args| serde_json::from_value(serde_json::Value::Object(args)))
                        .transpose()
                        .map_err(|e| McpError::invalid_params(format!("Invalid parameters: {}", e), None))?
                        .ok_or_else(|| McpError::invalid_params("Missing parameters", None))?;

                    Ok(self.generate_video(tool_params).await)
                }
                _ => Err(McpError::invalid_params(format!("Unknown tool: {}", params.name), None)),
            }
        }
    }

    fn list_resources(
        &self,
        _params: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        async move {
            debug!("Listing resources");

            let models_resource = rmcp::model::Resource {
                raw: rmcp::model::RawResource {
                    uri: resources::MODELS_URI.to_string(),
                    name: "Available Video Models".to_string(),
                    title: None,
                    description: Some("Seedance models with their resolution, ratio and duration limits".to_string()),
                    mime_type: Some("application/json".to_string()),
                    size: None,
                    icons: None,
                    meta: None,
                },
                annotations: None,
            };

            let providers_resource = rmcp::model::Resource {
                raw: rmcp::model::RawResource {
                    uri: resources::PROVIDERS_URI.to_string(),
                    name: "Available Providers".to_string(),
                    title: None,
                    description: Some("List of available video generation providers".to_string()),
                    mime_type: Some("application/json".to_string()),
                    size: None,
                    icons: None,
                    meta: None,
                },
                annotations: None,
            };

            Ok(ListResourcesResult {
                resources: vec![models_resource, providers_resource],
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn read_resource(
        &self,
        params: rmcp::model::ReadResourceRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move {
            let uri = &params.uri;
            debug!(uri = %uri, "Reading resource");

            let content = resources::read(uri).ok_or_else(|| {
                McpError::resource_not_found(format!("Unknown resource: {}", uri), None)
            })?;

            Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(content, uri.clone())],
            })
        }
    }
}
