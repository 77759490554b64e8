use std::sync::Arc;

use bookstore_api_route::{
    Route,
    RouteError,
};
use tracing::{
    debug,
    error,
    info,
};

use crate::{
    request::{
        RequestEvent,
        RouteRequest,
    },
    response::{
        ResponseEnvelope,
        RouteFn,
    },
    routes,
    store::{
        BookRepository,
        InMemoryBooks,
    },
};


pub type StoreFactory = Arc<dyn Fn() -> Box<dyn BookRepository> + Send + Sync>;

pub struct StoredRoute {
    pub route: Route,
    pub func: RouteFn,
}

pub struct Application {
    routes: Vec<StoredRoute>,
    fallback: RouteFn,
    store: StoreFactory,
}

pub struct ApplicationBuilder {
    routes: Vec<(String, String, RouteFn)>,
    fallback: RouteFn,
    store: StoreFactory,
}


impl Application {
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    /// The bookstore route table backed by a freshly seeded in-memory store.
    pub fn bookstore() -> Result<Self, RouteError> {
        Self::builder()
            .add_route("GET", routes::BOOKS, routes::list_books)
            .add_route("POST", routes::BOOKS, routes::add_book)
            .add_route("OPTIONS", routes::BOOKS, routes::preflight)
            .build()
    }

    pub fn routes(&self) -> &[StoredRoute] {
        &self.routes
    }

    /// Dispatches one event. Routes are tried in registration order and the
    /// first match wins; anything unmatched goes to the fallback. A fault
    /// from any route is turned into a 500 envelope, so this never fails.
    pub async fn handle(&self, event: RequestEvent) -> ResponseEnvelope {
        debug!(event = ?event, "received event");

        let mut request = RouteRequest::new(event, (self.store)());

        info!(
            resource = request.resource(),
            method = request.method(),
            "dispatching request"
        );

        let func = self.routes
            .iter()
            .find(|stored| stored.route.matches(request.incoming_route()))
            .map(|stored| stored.func)
            .unwrap_or(self.fallback);

        match func(&mut request).await {
            Ok(response) => response,
            Err(fault) => {
                error!(error = %fault, kind = fault.kind(), "request failed");

                ResponseEnvelope::fault(&fault)
            },
        }
    }
}


impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            fallback: routes::catch_all,
            store: Arc::new(|| -> Box<dyn BookRepository> { Box::new(InMemoryBooks::seeded()) }),
        }
    }

    pub fn add_route<M: Into<String>, R: Into<String>>(mut self, method: M, resource: R, func: RouteFn) -> Self {
        self.routes.push((method.into(), resource.into(), func));
        self
    }

    pub fn fallback(mut self, func: RouteFn) -> Self {
        self.fallback = func;
        self
    }

    /// Sets the factory that produces the repository for each invocation.
    pub fn store<F, S>(mut self, factory: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: BookRepository + 'static,
    {
        self.store = Arc::new(move || -> Box<dyn BookRepository> { Box::new(factory()) });
        self
    }

    pub fn build(self) -> Result<Application, RouteError> {
        let routes = self.routes
            .into_iter()
            .map(|(method, resource, func)| {
                Route::new(method, resource)
                    .map(|route| StoredRoute { route, func })
            })
            .collect::<Result<Vec<StoredRoute>, RouteError>>()?;

        Ok(Application {
            routes,
            fallback: self.fallback,
            store: self.store,
        })
    }
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
