//! Error type shared by the REST client and the views that render its failures.
//!
//! ERROR HANDLING
//! ==============
//! Every API call returns `Result<_, ApiError>`. Views turn the error into an
//! inline line of text via `Display`; nothing here panics on bad input.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("{}", status_message(*status, detail.as_deref()))]
    Status { status: u16, detail: Option<String> },
    /// A 2xx body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The request payload could not be serialized.
    #[error("invalid request: {0}")]
    Encode(String),
    /// HTTP is only performed in the browser; server rendering gets this.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Backend-provided `detail` text, when the response carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Build a status error from a raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, detail: detail_from_body(body) }
    }
}

fn status_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("request failed ({status}): {detail}"),
        None => format!("request failed ({status})"),
    }
}

/// Extract the `detail` field of a FastAPI-style error body.
///
/// A string detail is returned as-is. Validation errors arrive as a list of
/// objects with a `msg` field; their messages are joined with `"; "`.
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}
