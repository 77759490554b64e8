use http::method::InvalidMethod;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("InvalidMethod")]
    InvalidMethod(#[from] InvalidMethod),
    #[error("InvalidRoute `{route}`")]
    InvalidRoute { route: String },
}

impl RouteError {
    pub fn invalid_uri(uri: &str) -> Self {
        Self::InvalidRoute {
            route: uri.into()
        }
    }
}
