//! The HTTP-style response envelope returned to the invoker.

use std::collections::BTreeMap;

use serde::Serialize;

/// Response envelope with the `{statusCode, body, headers}` wire shape.
///
/// `body` is itself JSON text, nested inside the envelope as a string. The
/// `headers` field is omitted entirely on the error path, not serialized as
/// null or an empty map.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<&'static str, &'static str>>,
}

impl Response {
    /// 200 envelope carrying the serialized record array plus the JSON
    /// content type and permissive CORS headers.
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
            headers: Some(BTreeMap::from([
                ("Content-Type", "application/json"),
                ("Access-Control-Allow-Origin", "*"),
            ])),
        }
    }

    /// 500 envelope wrapping the error message, with no headers.
    pub fn internal_error(message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self {
            status_code: 500,
            body,
            headers: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn ok_envelope_wire_shape() {
        let resp = Response::ok("[]".to_string());
        let wire: Value = serde_json::to_value(&resp).unwrap();

        assert_eq!(wire["statusCode"], 200);
        assert_eq!(wire["body"], "[]");
        let headers = wire["headers"].as_object().unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["Content-Type"], "application/json");
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    }

    #[test]
    fn error_envelope_omits_headers() {
        let resp = Response::internal_error("Requested resource not found");
        let wire: Value = serde_json::to_value(&resp).unwrap();

        assert_eq!(wire["statusCode"], 500);
        assert!(wire.get("headers").is_none());

        let body: Value = serde_json::from_str(wire["body"].as_str().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Requested resource not found"}));
    }
}
