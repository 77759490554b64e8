pub use application::{
    Application,
    ApplicationBuilder,
};
pub use book::Book;
pub use error::HandlerFault;
pub use request::{
    RequestEvent,
    RouteRequest,
};
pub use response::{
    ResponseEnvelope,
    RouteFn,
    RouteResult,
};
pub use store::{
    BookRepository,
    InMemoryBooks,
    StoreError,
};
pub use testing::TestApplication;

pub use bookstore_api_route as route;
pub use futures;
pub use http;

pub mod application;
pub mod book;
mod error;
pub mod guards;
pub mod logging;
pub mod request;
pub mod response;
pub mod routes;
pub mod store;
pub mod testing;
