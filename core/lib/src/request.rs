use bookstore_api_route::IncomingRoute;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use crate::{
    guards::json_kind,
    store::BookRepository,
};


pub const DEFAULT_RESOURCE: &str = "/";
pub const DEFAULT_METHOD: &str = "GET";

/// The gateway event fields the dispatcher reads. Every other field of the
/// proxy event is ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEvent {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    /// JSON type of a `body` that arrived as something other than a string.
    #[serde(skip)]
    pub unreadable_body: Option<&'static str>,
}

impl RequestEvent {
    pub fn new<M: Into<String>, R: Into<String>>(method: M, resource: R) -> Self {
        Self {
            resource: Some(resource.into()),
            http_method: Some(method.into()),
            body: None,
            unreadable_body: None,
        }
    }

    pub fn with_body<B: Into<String>>(mut self, body: B) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Reads the event without failing. A `resource` or `httpMethod` that is
    /// missing or not a string is treated as absent. A `body` that is `null`,
    /// `false` or `0` is absent too; any other non-string body is recorded in
    /// `unreadable_body` so the route that reads it can fault.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(String::from)
        };

        Self {
            resource: field("resource"),
            http_method: field("httpMethod"),
            body: field("body"),
            unreadable_body: value
                .get("body")
                .and_then(unreadable),
        }
    }

    /// Resource template, `/` when absent or empty.
    pub fn resource(&self) -> &str {
        non_empty(&self.resource)
            .unwrap_or(DEFAULT_RESOURCE)
    }

    /// HTTP method, `GET` when absent or empty.
    pub fn http_method(&self) -> &str {
        non_empty(&self.http_method)
            .unwrap_or(DEFAULT_METHOD)
    }

    /// Raw body, `None` when absent or empty.
    pub fn body(&self) -> Option<&str> {
        non_empty(&self.body)
    }
}

impl From<&Value> for RequestEvent {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

fn unreadable(body: &Value) -> Option<&'static str> {
    match body {
        Value::Null | Value::String(_) | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(json_kind(other)),
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .filter(|e| !e.is_empty())
}


/// Everything a route function gets to work with for one invocation.
pub struct RouteRequest {
    event: RequestEvent,
    incoming: IncomingRoute,
    store: Box<dyn BookRepository>,
}

impl RouteRequest {
    pub fn new(event: RequestEvent, store: Box<dyn BookRepository>) -> Self {
        let incoming = IncomingRoute::new(
            event.http_method(),
            event.resource(),
        );

        Self {
            event,
            incoming,
            store,
        }
    }

    pub fn incoming_route(&self) -> &IncomingRoute {
        &self.incoming
    }

    pub fn resource(&self) -> &str {
        self.event.resource()
    }

    pub fn method(&self) -> &str {
        self.event.http_method()
    }

    pub fn body(&self) -> Option<&str> {
        self.event.body()
    }

    pub fn unreadable_body(&self) -> Option<&'static str> {
        self.event.unreadable_body
    }

    pub fn store(&self) -> &dyn BookRepository {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn BookRepository {
        self.store.as_mut()
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::RequestEvent;

    #[test]
    fn test_defaults() {
        let event = RequestEvent::default();

        assert_eq!(event.resource(), "/");
        assert_eq!(event.http_method(), "GET");
        assert_eq!(event.body(), None);
    }

    #[test]
    fn test_empty_strings_fall_back() {
        let event = RequestEvent::new("", "").with_body("");

        assert_eq!(event.resource(), "/");
        assert_eq!(event.http_method(), "GET");
        assert_eq!(event.body(), None);
    }

    #[test]
    fn test_from_proxy_event() {
        let raw = json!({
            "resource": "/books",
            "path": "/books",
            "httpMethod": "POST",
            "headers": {"Content-Type": "application/json"},
            "body": "{\"title\":\"X\"}",
            "isBase64Encoded": false,
        });
        let event = RequestEvent::from(&raw);

        assert_eq!(event.resource(), "/books");
        assert_eq!(event.http_method(), "POST");
        assert_eq!(event.body(), Some("{\"title\":\"X\"}"));
    }

    #[test]
    fn test_from_value_is_lenient() {
        let raw = json!({
            "resource": 42,
            "httpMethod": null,
            "body": null,
        });
        let event = RequestEvent::from_value(&raw);

        assert_eq!(event, RequestEvent::default());
        assert_eq!(RequestEvent::from_value(&json!("not an event")), RequestEvent::default());
    }

    #[test]
    fn test_non_string_body_is_recorded() {
        let object = RequestEvent::from_value(&json!({"body": {"title": "X"}}));
        let number = RequestEvent::from_value(&json!({"body": 5}));
        let truthy = RequestEvent::from_value(&json!({"body": true}));

        assert_eq!(object.body(), None);
        assert_eq!(object.unreadable_body, Some("object"));
        assert_eq!(number.unreadable_body, Some("number"));
        assert_eq!(truthy.unreadable_body, Some("boolean"));
    }

    #[test]
    fn test_falsy_body_is_absent() {
        for body in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            let event = RequestEvent::from_value(&json!({"body": body}));

            assert_eq!(event.body(), None);
            assert_eq!(event.unreadable_body, None);
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let event: RequestEvent = serde_json::from_value(json!({
            "resource": "/unknown",
            "httpMethod": "DELETE",
        }))
        .unwrap();

        assert_eq!(event.resource(), "/unknown");
        assert_eq!(event.http_method(), "DELETE");
    }
}
