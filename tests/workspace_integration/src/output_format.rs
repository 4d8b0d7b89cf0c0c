//! Output format tests.
//!
//! Every `generate_video` outcome reaches the client as exactly one
//! non-empty text item, with `is_error` set on failure.

#[cfg(test)]
use rmcp::model::{CallToolResult, RawContent};

/// Text of a single-item result, or a description of what is wrong with it.
#[cfg(test)]
fn single_text(result: &CallToolResult) -> Result<&str, String> {
    if result.content.len() != 1 {
        return Err(format!("Expected one content item, got {}", result.content.len()));
    }

    match &result.content[0].raw {
        RawContent::Text(text) if text.text.is_empty() => {
            Err("Text content should not be empty".to_string())
        }
        RawContent::Text(text) => Ok(text.text.as_str()),
        other => Err(format!("Expected text content, got {:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_mcp_video::{ToolResult, VideoGenerateResult};
    use ark_mcp_video::handler::DEFAULT_MODEL;
    use std::path::PathBuf;

    fn generated() -> VideoGenerateResult {
        VideoGenerateResult {
            saved_path: PathBuf::from("/srv/videos/out.mp4"),
            model: DEFAULT_MODEL.to_string(),
            task_id: "cgt-20250101-abc".to_string(),
            size_bytes: 1024,
        }
    }

    #[test]
    fn test_success_is_single_text_item() {
        let result: CallToolResult = ToolResult::success(&generated()).into();

        assert_eq!(result.is_error, Some(false));
        let text = single_text(&result).unwrap();
        assert!(text.contains("/srv/videos/out.mp4"));
        assert!(text.contains("cgt-20250101-abc"));
        assert!(text.contains(DEFAULT_MODEL));
    }

    #[test]
    fn test_failure_is_flagged_as_error() {
        let result: CallToolResult =
            ToolResult::failure("Video Gen Failed: Task failed with error: quota exceeded").into();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            single_text(&result).unwrap(),
            "Video Gen Failed: Task failed with error: quota exceeded"
        );
    }

    #[test]
    fn test_single_text_rejects_empty_text() {
        let result = CallToolResult::success(vec![rmcp::model::Content::text("")]);
        assert!(single_text(&result).is_err());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use ark_mcp_video::ToolResult;
    use proptest::prelude::*;

    proptest! {
        /// Failure messages pass through to the client verbatim.
        #[test]
        fn failure_message_is_preserved(message in "[a-zA-Z0-9 .,:']{1,120}") {
            let result: CallToolResult = ToolResult::failure(message.clone()).into();
            prop_assert_eq!(result.is_error, Some(true));
            prop_assert_eq!(single_text(&result).unwrap(), message.as_str());
        }
    }
}
