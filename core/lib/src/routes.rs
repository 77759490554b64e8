use chrono::{
    SecondsFormat,
    Utc,
};
use futures::future::BoxFuture;
use http::StatusCode;
use serde_json::{
    json,
    Value,
};

use crate::{
    book::Book,
    error::HandlerFault,
    guards::{
        Guard,
        JsonBody,
    },
    request::RouteRequest,
    response::{
        ResponseEnvelope,
        RouteResult,
    },
};


pub const BOOKS: &str = "/books";

/// `GET /books`
pub fn list_books(request: &mut RouteRequest) -> BoxFuture<'_, RouteResult> {
    Box::pin(async move {
        let books = request
            .store()
            .list_books()
            .await?;

        ResponseEnvelope::json(
            StatusCode::OK,
            &json!({
                "success": true,
                "count": books.len(),
                "data": books,
            }),
        )
    })
}

/// `POST /books`
///
/// The new id is one past the current catalogue size. An array body is
/// echoed back without reaching the store.
pub fn add_book(request: &mut RouteRequest) -> BoxFuture<'_, RouteResult> {
    Box::pin(async move {
        let data = match JsonBody::from_request(request)? {
            JsonBody::Object(attributes) => {
                let count = request
                    .store()
                    .list_books()
                    .await?
                    .len();

                let book = Book::from_attributes((count + 1).to_string(), attributes);
                let book = request
                    .store_mut()
                    .add_book(book)
                    .await?;

                serde_json::to_value(book)
                    .map_err(HandlerFault::Serialize)?
            },
            JsonBody::Array(items) => Value::Array(items),
        };

        ResponseEnvelope::json(
            StatusCode::CREATED,
            &json!({
                "success": true,
                "message": "Book added successfully",
                "data": data,
            }),
        )
    })
}

/// `OPTIONS /books`
pub fn preflight(_request: &mut RouteRequest) -> BoxFuture<'_, RouteResult> {
    Box::pin(async move {
        Ok(ResponseEnvelope::preflight())
    })
}

/// Fallback for every route key nothing else claimed.
pub fn catch_all(request: &mut RouteRequest) -> BoxFuture<'_, RouteResult> {
    Box::pin(async move {
        let timestamp = Utc::now()
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        ResponseEnvelope::json(
            StatusCode::OK,
            &json!({
                "success": true,
                "message": "Bookstore API is running",
                "timestamp": timestamp,
                "resource": request.resource(),
                "method": request.method(),
                "note": "Try GET /books or POST /books",
            }),
        )
    })
}
