/// Resource of an inbound event, split into segments.
///
/// `segments` is `None` when the resource does not start with `/`; such a
/// resource never matches a route.
#[derive(Debug)]
pub struct IncomingRouteUri {
    pub segments: Option<Vec<String>>,
}

/// The route key of an inbound event: its raw method and resource.
#[derive(Debug)]
pub struct IncomingRoute {
    pub method: String,
    pub uri: IncomingRouteUri,
}

impl IncomingRoute {
    pub fn new<M: Into<String>>(method: M, resource: &str) -> Self {
        Self {
            method: method.into(),
            uri: IncomingRouteUri::from(resource),
        }
    }

    pub fn get(&self, index: usize) -> Option<&String> {
        self.uri
            .segments
            .as_ref()
            .and_then(|segments| segments.get(index))
    }
}

impl From<&str> for IncomingRouteUri {
    fn from(resource: &str) -> Self {
        // Empty segments are kept so `/books/` and `//books` stay distinct
        // from `/books`.
        let segments = resource
            .strip_prefix('/')
            .map(|rest| {
                if rest.is_empty() {
                    Vec::new()
                } else {
                    rest
                        .split('/')
                        .map(String::from)
                        .collect()
                }
            });

        Self {
            segments
        }
    }
}
