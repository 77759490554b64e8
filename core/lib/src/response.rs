use std::collections::BTreeMap;

use futures::future::BoxFuture;
use http::StatusCode;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    json,
    Value,
};

use crate::{
    error::HandlerFault,
    request::RouteRequest,
};


pub const CONTENT_TYPE: &str = "Content-Type";
pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET,POST,OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

pub type RouteResult = Result<ResponseEnvelope, HandlerFault>;
pub type RouteFn = for<'a> fn(&'a mut RouteRequest) -> BoxFuture<'a, RouteResult>;


/// The proxy response handed back to the gateway.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ResponseEnvelope {
    /// A response carrying the JSON content type and the open CORS origin
    /// that every response has.
    pub fn new(status: StatusCode, body: String) -> Self {
        let mut headers = BTreeMap::new();

        headers.insert(CONTENT_TYPE.into(), "application/json".into());
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN.into(), ALLOW_ORIGIN.into());

        Self {
            status_code: status.as_u16(),
            headers,
            body,
        }
    }

    pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> RouteResult {
        let body = serde_json::to_string(payload)
            .map_err(HandlerFault::Serialize)?;

        Ok(Self::new(status, body))
    }

    /// Preflight response advertising the methods and headers `/books`
    /// accepts.
    pub fn preflight() -> Self {
        Self::new(StatusCode::OK, json!({"success": true}).to_string())
            .with_header(ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS)
            .with_header(ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS)
    }

    pub fn fault(fault: &HandlerFault) -> Self {
        let body = json!({
            "success": false,
            "error": fault.to_string(),
            "stack": fault.stack(),
        });

        Self::new(StatusCode::INTERNAL_SERVER_ERROR, body.to_string())
    }

    pub fn with_header<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json_body(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}


#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde_json::json;

    use super::ResponseEnvelope;
    use crate::error::HandlerFault;

    #[test]
    fn test_base_headers() {
        let response = ResponseEnvelope::json(StatusCode::CREATED, &json!({"success": true}))
            .unwrap();

        assert_eq!(response.status_code, 201);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(response.header("Access-Control-Allow-Methods"), None);
    }

    #[test]
    fn test_preflight_headers() {
        let response = ResponseEnvelope::preflight();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.header("access-control-allow-methods"), Some("GET,POST,OPTIONS"));
        assert_eq!(response.header("Access-Control-Allow-Headers"), Some("Content-Type"));
        assert_eq!(response.json_body().unwrap(), json!({"success": true}));
    }

    #[test]
    fn test_fault_body() {
        let response = ResponseEnvelope::fault(&HandlerFault::Unassignable { found: "null" });
        let body = response.json_body().unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "cannot assign an id to a null request body");
        assert!(body["stack"].as_str().unwrap().starts_with("Unassignable"));
        assert_eq!(response.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_serialize_envelope() {
        let response = ResponseEnvelope::preflight();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert_eq!(value["headers"]["Access-Control-Allow-Origin"], "*");
        assert_eq!(value["body"], "{\"success\":true}");
    }
}
