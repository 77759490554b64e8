use serde_json::{
    Map,
    Value,
};
use crate::{
    error::HandlerFault,
    guards::Guard,
    request::RouteRequest,
};


const EMPTY_OBJECT: &str = "{}";

/// The request body parsed as JSON that can take an `id`. An absent body
/// reads as `{}`. Arrays are accepted as-is; an id on an array has no JSON
/// representation, so they are echoed back unchanged.
#[derive(Debug, PartialEq)]
pub enum JsonBody {
    Object(Map<String, Value>),
    Array(Vec<Value>),
}

impl JsonBody {
    pub fn parse(body: Option<&str>) -> Result<Self, HandlerFault> {
        let value: Value = serde_json::from_str(body.unwrap_or(EMPTY_OBJECT))
            .map_err(HandlerFault::InvalidBody)?;

        match value {
            Value::Object(map) => Ok(Self::Object(map)),
            Value::Array(items) => Ok(Self::Array(items)),
            other => Err(HandlerFault::Unassignable { found: json_kind(&other) }),
        }
    }
}

impl Guard for JsonBody {
    fn from_request(request: &RouteRequest) -> Result<Self, HandlerFault> {
        if let Some(found) = request.unreadable_body() {
            return Err(HandlerFault::UnreadableBody { found });
        }

        Self::parse(request.body())
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
