//! MCP Resources for the Video server.
//!
//! This module provides resource implementations for:
//! - `video://models` - Seedance models and their limits
//! - `video://providers` - The video provider backing this server

use ark_mcp_common::config::{API_KEY_VAR, DEFAULT_BASE_URL};
use ark_mcp_common::models::ModelRegistry;
use serde::Serialize;

/// URI of the models resource.
pub const MODELS_URI: &str = "video://models";

/// URI of the providers resource.
pub const PROVIDERS_URI: &str = "video://providers";

/// Information about an available video generation model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    /// Model identifier
    pub id: &'static str,
    /// Model aliases
    pub aliases: Vec<&'static str>,
    /// Supported resolutions
    pub supported_resolutions: Vec<&'static str>,
    /// Supported aspect ratios
    pub supported_ratios: Vec<&'static str>,
    /// Shortest duration in seconds
    pub min_duration: u8,
    /// Longest duration in seconds
    pub max_duration: u8,
    /// Whether this is the default model
    pub is_default: bool,
}

/// Information about an available video provider.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderInfo {
    /// Provider identifier
    pub id: String,
    /// Provider display name
    pub name: String,
    /// Provider description
    pub description: String,
    /// Default API base URL
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Whether this is the default provider
    pub is_default: bool,
}

/// List all known Seedance models.
pub fn list_models() -> Vec<ModelInfo> {
    ModelRegistry::list_seedance_models()
        .iter()
        .map(|m| ModelInfo {
            id: m.id,
            aliases: m.aliases.to_vec(),
            supported_resolutions: m.supported_resolutions.to_vec(),
            supported_ratios: m.supported_ratios.to_vec(),
            min_duration: m.min_duration,
            max_duration: m.max_duration,
            is_default: m.id == crate::handler::DEFAULT_MODEL,
        })
        .collect()
}

/// List all available video providers.
pub fn list_providers() -> Vec<ProviderInfo> {
    vec![ProviderInfo {
        id: "volcengine-ark".to_string(),
        name: "Volcengine Ark".to_string(),
        description: "Volcengine Ark content generation tasks running Doubao Seedance models".to_string(),
        base_url: DEFAULT_BASE_URL.to_string(),
        api_key_env: API_KEY_VAR.to_string(),
        is_default: true,
    }]
}

/// Get models resource as JSON string.
pub fn models_resource_json() -> String {
    serde_json::to_string_pretty(&list_models()).unwrap_or_else(|_| "[]".to_string())
}

/// Get providers resource as JSON string.
pub fn providers_resource_json() -> String {
    serde_json::to_string_pretty(&list_providers()).unwrap_or_else(|_| "[]".to_string())
}

/// Resource body for `uri`, or `None` if the URI is unknown.
pub fn read(uri: &str) -> Option<String> {
    match uri {
        MODELS_URI => Some(models_resource_json()),
        PROVIDERS_URI => Some(providers_resource_json()),
        _ => None,
    }
}
