use std::error::Error;

use crate::store::StoreError;


/// Any failure raised while a route is producing its response.
///
/// Faults never escape [`Application::handle`](crate::Application::handle);
/// they are rendered into a 500 envelope instead.
#[derive(Debug, thiserror::Error)]
pub enum HandlerFault {
    #[error("invalid request body: {0}")]
    InvalidBody(serde_json::Error),
    #[error("request body must be a JSON string, found {found}")]
    UnreadableBody { found: &'static str },
    #[error("cannot assign an id to a {found} request body")]
    Unassignable { found: &'static str },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to serialize response: {0}")]
    Serialize(serde_json::Error),
}

impl HandlerFault {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "InvalidBody",
            Self::UnreadableBody { .. } => "UnreadableBody",
            Self::Unassignable { .. } => "Unassignable",
            Self::Store(_) => "Store",
            Self::Serialize(_) => "Serialize",
        }
    }

    /// Renders the fault and its `source()` chain, one cause per line.
    pub fn stack(&self) -> String {
        let mut stack = format!("{}: {}", self.kind(), self);
        let mut source = self.source();

        while let Some(cause) = source {
            stack.push_str(&format!("\n    caused by: {}", cause));
            source = cause.source();
        }

        stack
    }
}
