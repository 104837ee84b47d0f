use serde::{Deserialize, Serialize};

/// Response envelope wrapping every Cloudflare API result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded
    #[serde(default)]
    pub success: bool,

    /// Errors reported by the API
    #[serde(default)]
    pub errors: Vec<ApiMessage>,

    /// Informational messages
    #[serde(default)]
    pub messages: Vec<ApiMessage>,

    /// The payload, absent on failure and sometimes on empty collections
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Join all error messages into a single line
    #[must_use]
    pub fn error_message(&self) -> String {
        if self.errors.is_empty() {
            return "request was not successful".to_string();
        }

        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Error or informational message inside an [`ApiResponse`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Cloudflare error code
    #[serde(default)]
    pub code: i64,

    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

impl std::fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope() {
        let body = r#"{"success":false,"errors":[{"code":7003,"message":"Could not route"},{"code":10000,"message":"Authentication error"}],"messages":[],"result":null}"#;
        let parsed: ApiResponse<serde_json::Value> = serde_json::from_str(body).unwrap();

        assert!(!parsed.success);
        assert!(parsed.result.is_none());
        assert_eq!(
            parsed.error_message(),
            "[7003] Could not route; [10000] Authentication error"
        );
    }

    #[derive(Debug, Deserialize)]
    struct Created {
        id: String,
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> ApiResponse<T> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_result_type_needs_no_default() {
        let parsed: ApiResponse<Created> = decode(r#"{"success":true,"result":{"id":"abc"}}"#);
        assert_eq!(parsed.result.map(|c| c.id).as_deref(), Some("abc"));

        let empty: ApiResponse<Created> = decode(r#"{"success":true}"#);
        assert!(empty.result.is_none());
    }

    #[test]
    fn test_missing_result_defaults_to_none() {
        let parsed: ApiResponse<Vec<String>> =
            serde_json::from_str(r#"{"success":true,"errors":[],"messages":[]}"#).unwrap();
        assert!(parsed.success);
        assert!(parsed.result.is_none());
    }
}
