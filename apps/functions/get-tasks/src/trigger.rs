use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Incoming gateway event.
///
/// The listing operation ignores every field; the payload is accepted and
/// dropped. Kept deserializable so any trigger shape the gateway delivers
/// parses cleanly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GatewayRequest {
    pub path: Option<String>,
    pub http_method: Option<String>,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

/// Outgoing gateway envelope.
///
/// Serializes as `{"statusCode": ..., "headers": {...}, "body": "..."}` —
/// the shape the hosting runtime hands back to the gateway.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl GatewayResponse {
    /// A 200 response carrying a JSON body
    pub fn json(body: String) -> Self {
        Self {
            status_code: 200,
            headers: HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            body,
        }
    }
}
