//! Tool schema validity tests.
//!
//! The `generate_video` input schema must be a JSON object schema listing
//! every argument under its camelCase name, with `prompt` and `savePath`
//! required.

#[cfg(test)]
use serde_json::Value;

/// Validates that a JSON schema has the required structure.
#[cfg(test)]
fn validate_json_schema(schema: &Value) -> Result<(), String> {
    let obj = schema
        .as_object()
        .ok_or_else(|| "Schema must be an object".to_string())?;

    if let Some(type_val) = obj.get("type") {
        if type_val != "object" {
            return Err(format!("Expected type 'object', got {:?}", type_val));
        }
    }

    if let Some(properties) = obj.get("properties") {
        if !properties.is_object() {
            return Err("Properties must be an object".to_string());
        }
    }

    Ok(())
}

/// Names listed under `required`.
#[cfg(test)]
fn required_fields(schema: &Value) -> Vec<String> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|fields| {
            fields
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_mcp_video::GenerateVideoToolParams;
    use schemars::schema_for;

    fn tool_schema() -> Value {
        serde_json::to_value(schema_for!(GenerateVideoToolParams)).unwrap()
    }

    #[test]
    fn test_json_schema_validation() {
        let valid_schema = serde_json::json!({
            "type": "object",
            "properties": { "prompt": { "type": "string" } },
            "required": ["prompt"]
        });
        assert!(validate_json_schema(&valid_schema).is_ok());

        let invalid_schema = serde_json::json!({ "type": "string" });
        assert!(validate_json_schema(&invalid_schema).is_err());
    }

    #[test]
    fn test_generate_video_schema_validity() {
        let schema = tool_schema();
        assert!(validate_json_schema(&schema).is_ok());
        assert_eq!(schema.get("type").and_then(Value::as_str), Some("object"));
    }

    #[test]
    fn test_generate_video_schema_uses_camel_case() {
        let schema = tool_schema();
        let properties = schema.get("properties").unwrap().as_object().unwrap();

        for field in [
            "prompt",
            "model",
            "savePath",
            "referenceFilePath",
            "resolution",
            "ratio",
            "duration",
        ] {
            assert!(properties.contains_key(field), "Schema should have '{}' property", field);
        }
        assert!(!properties.contains_key("save_path"));
    }

    #[test]
    fn test_generate_video_schema_required_fields() {
        let mut required = required_fields(&tool_schema());
        required.sort();
        assert_eq!(required, vec!["prompt".to_string(), "savePath".to_string()]);
    }

    #[test]
    fn test_schema_fields_carry_descriptions() {
        let schema = tool_schema();
        let properties = schema.get("properties").unwrap().as_object().unwrap();
        let save_path = properties.get("savePath").unwrap();
        let description = save_path.get("description").and_then(Value::as_str).unwrap_or_default();
        assert!(description.contains("MP4"), "got {:?}", description);
    }
}
