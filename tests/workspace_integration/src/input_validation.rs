//! Input parameter validation tests.
//!
//! Malformed tool arguments fail deserialization (surfaced as an MCP
//! invalid-params error), while well-formed arguments with unsupported
//! values fail `VideoGenerateParams::validate` with per-field details.

#[cfg(test)]
mod tests {
    use ark_mcp_video::{GenerateVideoToolParams, VideoGenerateParams};

    fn from_args(args: serde_json::Value) -> Result<VideoGenerateParams, serde_json::Error> {
        serde_json::from_value::<GenerateVideoToolParams>(args).map(Into::into)
    }

    #[test]
    fn test_missing_prompt_fails_deserialization() {
        assert!(from_args(serde_json::json!({ "savePath": "a.mp4" })).is_err());
    }

    #[test]
    fn test_wrong_duration_type_fails_deserialization() {
        let result = from_args(serde_json::json!({
            "prompt": "A cat",
            "savePath": "a.mp4",
            "duration": "five"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_minimal_arguments_validate() {
        let params = from_args(serde_json::json!({ "prompt": "A cat", "savePath": "a.mp4" })).unwrap();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_unsupported_resolution_is_rejected() {
        let params = from_args(serde_json::json!({
            "prompt": "A cat",
            "savePath": "a.mp4",
            "resolution": "2160p"
        }))
        .unwrap();

        let errors = params.validate().unwrap_err();
        assert!(
            errors.iter().any(|e| e.field == "resolution"),
            "Should have resolution validation error"
        );
    }

    #[test]
    fn test_lite_model_limits_apply_through_alias() {
        let params = from_args(serde_json::json!({
            "prompt": "A cat",
            "savePath": "a.mp4",
            "model": "seedance-lite-i2v",
            "resolution": "1080p"
        }))
        .unwrap();

        assert!(params.validate().is_err());
    }

    #[test]
    fn test_whitespace_prompt_is_rejected() {
        let params = from_args(serde_json::json!({ "prompt": "   ", "savePath": "a.mp4" })).unwrap();
        let errors = params.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "prompt"));
    }
}

#[cfg(test)]
mod property_tests {
    use ark_mcp_common::models::{GENERIC_RATIOS, GENERIC_RESOLUTIONS};
    use ark_mcp_video::VideoGenerateParams;
    use ark_mcp_video::handler::DEFAULT_MODEL;
    use proptest::prelude::*;

    fn params(resolution: &str, ratio: &str, duration: u8) -> VideoGenerateParams {
        VideoGenerateParams {
            prompt: "A cat walking on a beach".to_string(),
            model: DEFAULT_MODEL.to_string(),
            save_path: "cat.mp4".to_string(),
            reference_file_path: None,
            resolution: resolution.to_string(),
            ratio: ratio.to_string(),
            duration,
        }
    }

    proptest! {
        /// Every supported resolution and ratio passes for the default model.
        #[test]
        fn supported_combinations_validate(
            resolution in proptest::sample::select(GENERIC_RESOLUTIONS),
            ratio in proptest::sample::select(GENERIC_RATIOS),
            duration in 2u8..=12,
        ) {
            prop_assert!(params(resolution, ratio, duration).validate().is_ok());
        }

        /// Unknown ratios always produce a ratio error.
        #[test]
        fn unknown_ratio_is_rejected(w in 5u8..50, h in 5u8..50) {
            let ratio = format!("{}:{}", w, h);
            prop_assume!(!GENERIC_RATIOS.contains(&ratio.as_str()));
            let errors = params("720p", &ratio, 5).validate().unwrap_err();
            prop_assert!(errors.iter().any(|e| e.field == "ratio"));
        }
    }
}
