//! Error bodies returned by the backend.
//!
//! Resources disagree on the key carrying the message, so all known ones are read.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        [self.message, self.error, self.detail]
            .into_iter()
            .flatten()
            .map(|m| m.trim().to_string())
            .find(|m| !m.is_empty())
    }
}

/// Server-supplied message from a raw response body, if any.
///
/// JSON bodies are searched for a message key; short plain-text bodies are used as is.
pub fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if body.starts_with('{') {
        return serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message);
    }
    if body.starts_with('<') || body.len() > 300 {
        return None;
    }
    Some(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keys_in_priority() {
        assert_eq!(
            server_message(r#"{"message":"Duplicate class id"}"#).as_deref(),
            Some("Duplicate class id")
        );
        assert_eq!(
            server_message(r#"{"error":"","detail":"Order locked"}"#).as_deref(),
            Some("Order locked")
        );
        assert_eq!(server_message(r#"{"status":500}"#), None);
    }

    #[test]
    fn test_plain_text_and_html() {
        assert_eq!(server_message("Not found").as_deref(), Some("Not found"));
        assert_eq!(server_message("<html>502</html>"), None);
        assert_eq!(server_message("  "), None);
    }
}
