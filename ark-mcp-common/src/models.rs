//! Model definitions and registry for Seedance video models on Volcengine Ark.
//!
//! Ark also accepts custom inference endpoint ids (`ep-...`), so an identifier
//! missing from this registry is not an error; callers fall back to the
//! generic limits below.

use serde::Serialize;

/// Resolutions accepted for models not in the registry.
pub const GENERIC_RESOLUTIONS: &[&str] = &["480p", "720p", "1080p"];

/// Aspect ratios accepted for models not in the registry.
pub const GENERIC_RATIOS: &[&str] = &["16:9", "4:3", "1:1", "3:4", "9:16", "21:9", "adaptive"];

/// Shortest clip, in seconds, accepted for models not in the registry.
pub const GENERIC_MIN_DURATION: u8 = 2;

/// Longest clip, in seconds, accepted for models not in the registry.
pub const GENERIC_MAX_DURATION: u8 = 12;

/// Seedance model definition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeedanceModel {
    /// Full model identifier
    pub id: &'static str,
    /// Model aliases for convenience
    #[serde(skip)]
    pub aliases: &'static [&'static str],
    /// Supported output resolutions
    pub supported_resolutions: &'static [&'static str],
    /// Supported aspect ratios
    pub supported_ratios: &'static [&'static str],
    /// Shortest supported duration in seconds
    pub min_duration: u8,
    /// Longest supported duration in seconds
    pub max_duration: u8,
}

impl SeedanceModel {
    /// Whether `seconds` falls inside this model's duration range.
    pub fn supports_duration(&self, seconds: u8) -> bool {
        (self.min_duration..=self.max_duration).contains(&seconds)
    }
}

// =============================================================================
// Seedance Model Definitions
// =============================================================================

/// Seedance 1.5 Pro (default)
pub const SEEDANCE_1_5_PRO: SeedanceModel = SeedanceModel {
    id: "doubao-seedance-1-5-pro-251215",
    aliases: &["seedance", "seedance-1.5-pro", "seedance-1-5-pro"],
    supported_resolutions: &["480p", "720p", "1080p"],
    supported_ratios: GENERIC_RATIOS,
    min_duration: 2,
    max_duration: 12,
};

/// Seedance 1.0 Pro
pub const SEEDANCE_1_0_PRO: SeedanceModel = SeedanceModel {
    id: "doubao-seedance-1-0-pro-250528",
    aliases: &["seedance-1.0-pro", "seedance-1-0-pro"],
    supported_resolutions: &["480p", "720p", "1080p"],
    supported_ratios: GENERIC_RATIOS,
    min_duration: 2,
    max_duration: 12,
};

/// Seedance 1.0 Pro Fast
pub const SEEDANCE_1_0_PRO_FAST: SeedanceModel = SeedanceModel {
    id: "doubao-seedance-1-0-pro-fast-251015",
    aliases: &["seedance-1.0-pro-fast", "seedance-1-0-pro-fast"],
    supported_resolutions: &["480p", "720p", "1080p"],
    supported_ratios: GENERIC_RATIOS,
    min_duration: 2,
    max_duration: 12,
};

/// Seedance 1.0 Lite, text-to-video
pub const SEEDANCE_1_0_LITE_T2V: SeedanceModel = SeedanceModel {
    id: "doubao-seedance-1-0-lite-t2v-250428",
    aliases: &["seedance-1.0-lite-t2v", "seedance-lite-t2v"],
    supported_resolutions: &["480p", "720p"],
    supported_ratios: GENERIC_RATIOS,
    min_duration: 2,
    max_duration: 12,
};

/// Seedance 1.0 Lite, image-to-video
pub const SEEDANCE_1_0_LITE_I2V: SeedanceModel = SeedanceModel {
    id: "doubao-seedance-1-0-lite-i2v-250428",
    aliases: &["seedance-1.0-lite-i2v", "seedance-lite-i2v"],
    supported_resolutions: &["480p", "720p"],
    supported_ratios: GENERIC_RATIOS,
    min_duration: 2,
    max_duration: 12,
};

/// All known Seedance models
pub const SEEDANCE_MODELS: &[SeedanceModel] = &[
    SEEDANCE_1_5_PRO,
    SEEDANCE_1_0_PRO,
    SEEDANCE_1_0_PRO_FAST,
    SEEDANCE_1_0_LITE_T2V,
    SEEDANCE_1_0_LITE_I2V,
];

// =============================================================================
// Model Registry
// =============================================================================

/// Model registry for resolution and listing.
pub struct ModelRegistry;

impl ModelRegistry {
    /// Resolve a Seedance model name or alias to its full definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use ark_mcp_common::models::ModelRegistry;
    ///
    /// let model = ModelRegistry::resolve_seedance("seedance-1.0-pro");
    /// assert_eq!(model.map(|m| m.id), Some("doubao-seedance-1-0-pro-250528"));
    ///
    /// // Custom endpoint ids are not in the registry.
    /// assert!(ModelRegistry::resolve_seedance("ep-20250101000000-abcde").is_none());
    /// ```
    pub fn resolve_seedance(name: &str) -> Option<&'static SeedanceModel> {
        let name = name.trim();
        SEEDANCE_MODELS
            .iter()
            .find(|model| model.id == name || model.aliases.contains(&name))
    }

    /// Canonical identifier to send to the API: the registry id for known
    /// names and aliases, the trimmed input otherwise.
    pub fn canonical_id(name: &str) -> String {
        Self::resolve_seedance(name)
            .map(|model| model.id.to_string())
            .unwrap_or_else(|| name.trim().to_string())
    }

    /// List all known Seedance models.
    pub fn list_seedance_models() -> &'static [SeedanceModel] {
        SEEDANCE_MODELS
    }
}
