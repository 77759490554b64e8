use std::{
    fmt,
    str::FromStr,
};

pub use error::RouteError;
pub use incoming::{
    IncomingRoute,
    IncomingRouteUri,
};
pub use route_uri::RouteUri;

pub mod error;
mod incoming;
mod route_uri;


/// A method and resource template pair that an event's route key is
/// matched against.
#[derive(Debug)]
pub struct Route {
    uri: RouteUri,
    method: http::Method,
}

impl Route {
    pub fn validate<R: AsRef<str>>(method: R, uri: R) -> Result<(), RouteError> {
        RouteUri::from_str(
            uri.as_ref()
        ).and(
            http::Method::from_str(
                method.as_ref()
            )
            .map_err(|e| e.into())
        ).map(|_| ())
    }

    pub fn new<R: AsRef<str>>(method: R, uri: R) -> Result<Self, RouteError> {
        let ret = Self {
            uri: RouteUri::from_str(uri.as_ref())?,
            method: http::Method::from_str(method.as_ref())?,
        };

        Ok(ret)
    }

    /// Methods compare byte for byte, so `get` never matches a `GET` route.
    pub fn matches(&self, incoming: &IncomingRoute) -> bool {
        self.method.as_str() == incoming.method && self.uri.matches(&incoming.uri)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.uri)
    }
}
