use crate::{
    error::HandlerFault,
    request::RouteRequest,
};

pub use json::JsonBody;
pub(crate) use json::json_kind;

mod json;


/// Extracts a typed value from the request a route is handling.
pub trait Guard: Sized {
    fn from_request(request: &RouteRequest) -> Result<Self, HandlerFault>;
}
