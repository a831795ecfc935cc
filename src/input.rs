//! Input parsing for PreToolUse hook invocations.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when parsing hook input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The request the host writes to stdin. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookRequest {
    /// Tool parameters; a missing or null value behaves like an empty object.
    #[serde(default)]
    pub tool_input: Option<ToolInput>,

    /// Session ID for audit logging (optional).
    #[serde(default)]
    pub session_id: Option<String>,
}

/// The subset of Write/Edit tool parameters the scanner cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    /// The write target.
    #[serde(default)]
    pub file_path: Option<String>,
    /// Full file body (Write).
    #[serde(default)]
    pub content: Option<String>,
    /// Replacement text (Edit).
    #[serde(default)]
    pub new_string: Option<String>,
}

static EMPTY_TOOL_INPUT: ToolInput = ToolInput {
    file_path: None,
    content: None,
    new_string: None,
};

impl HookRequest {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Tool parameters, or an empty set when absent.
    pub fn tool_input(&self) -> &ToolInput {
        self.tool_input.as_ref().unwrap_or(&EMPTY_TOOL_INPUT)
    }
}

impl ToolInput {
    /// The write target, empty when absent.
    pub fn file_path(&self) -> &str {
        self.file_path.as_deref().unwrap_or_default()
    }

    /// The text being written: `content` if non-empty, else `new_string`.
    pub fn scan_subject(&self) -> &str {
        [&self.content, &self.new_string]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|text| !text.is_empty())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_write_input() {
        let json = r#"{"tool_name":"Write","tool_input":{"file_path":".ready-check/a.md","content":"hello"}}"#;
        let request = HookRequest::parse(json).unwrap();
        let input = request.tool_input();
        assert_eq!(input.file_path(), ".ready-check/a.md");
        assert_eq!(input.scan_subject(), "hello");
    }

    #[test]
    fn test_parse_edit_input() {
        let json = r#"{"tool_name":"Edit","tool_input":{"file_path":"x.md","old_string":"a","new_string":"b"}}"#;
        let request = HookRequest::parse(json).unwrap();
        assert_eq!(request.tool_input().scan_subject(), "b");
    }

    #[test]
    fn test_empty_content_falls_back_to_new_string() {
        let input = ToolInput {
            file_path: None,
            content: Some(String::new()),
            new_string: Some("edit".to_string()),
        };
        assert_eq!(input.scan_subject(), "edit");
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let request = HookRequest::parse(r#"{"session_id":"abc"}"#).unwrap();
        assert_eq!(request.tool_input().file_path(), "");
        assert_eq!(request.tool_input().scan_subject(), "");
        assert_eq!(request.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_null_tool_input() {
        let request = HookRequest::parse(r#"{"tool_input":null}"#).unwrap();
        assert_eq!(request.tool_input().file_path(), "");
    }

    #[test]
    fn test_invalid_json() {
        assert!(HookRequest::parse("not valid json").is_err());
        assert!(HookRequest::parse("").is_err());
    }

    #[test]
    fn test_wrong_field_type() {
        assert!(HookRequest::parse(r#"{"tool_input":{"file_path":42}}"#).is_err());
    }
}
