use std::{
    fmt,
    str::FromStr,
};

use crate::{
    error::RouteError,
    incoming::IncomingRouteUri,
};


#[derive(Debug)]
pub struct RouteUri {
    // if empty, considered to be a root route, i.e., `/`
    segments: Vec<String>,
}

impl RouteUri {
    pub fn matches(&self, incoming: &IncomingRouteUri) -> bool {
        match &incoming.segments {
            Some(segments) => *segments == self.segments,
            None => false,
        }
    }
}

impl fmt::Display for RouteUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

impl FromStr for RouteUri {
    type Err = RouteError;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        if !route.starts_with('/') {
            return Err(RouteError::invalid_uri(route));
        }

        let parsed_uri = http::Uri::try_from(route)
            .map_err(|_| RouteError::invalid_uri(route))?;

        // query strings and fragments have no place in a resource template
        if parsed_uri.path() != route {
            return Err(RouteError::invalid_uri(route));
        }

        if route == "/" {
            return Ok(Self { segments: Vec::new() });
        }

        let mut segmented_route = &route[1..];

        if let Some(stripped) = segmented_route.strip_suffix('/') {
            segmented_route = stripped;
        }

        let segments: Vec<String> = segmented_route
            .split('/')
            .map(String::from)
            .collect();

        if segments.iter().any(|e| e.is_empty()) {
            return Err(RouteError::invalid_uri(route));
        }

        Ok(Self { segments })
    }
}


#[cfg(test)]
mod tests {
    use crate::RouteUri;


    #[test]
    fn test_parse_constants() {
        let root = "/".parse::<RouteUri>().unwrap();
        let books = "/books".parse::<RouteUri>().unwrap();
        let trailing = "/books/reviews/".parse::<RouteUri>().unwrap();

        assert!(root.segments.is_empty());
        assert_eq!(books.segments, vec!["books".to_string()]);
        assert_eq!(
            trailing.segments,
            vec![
                "books".to_string(),
                "reviews".to_string(),
            ],
        );
    }

    #[test]
    fn test_parse_errors() {
        let err_empty = "".parse::<RouteUri>();
        let err_character = "/books/a b/reviews".parse::<RouteUri>();
        let err_double_slash = "//".parse::<RouteUri>();
        let err_inner_empty = "/books//reviews".parse::<RouteUri>();
        let err_no_starting_slash = "books/reviews".parse::<RouteUri>();
        let err_query = "/books?limit=1".parse::<RouteUri>();

        assert!(err_empty.is_err());
        assert!(err_character.is_err());
        assert!(err_double_slash.is_err());
        assert!(err_inner_empty.is_err());
        assert!(err_no_starting_slash.is_err());
        assert!(err_query.is_err());
    }

    #[test]
    fn test_display() {
        let root = "/".parse::<RouteUri>().unwrap();
        let books = "/books/".parse::<RouteUri>().unwrap();

        assert_eq!(root.to_string(), "/");
        assert_eq!(books.to_string(), "/books");
    }
}
