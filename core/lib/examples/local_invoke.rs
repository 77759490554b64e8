use bookstore_api::{
    Application,
    TestApplication,
    http::StatusCode,
};


// Normally this would live in a test block; this shows how the handler can
// be exercised without the lambda runtime.
#[tokio::main]
async fn main() {
    let app = TestApplication::new(
        Application::bookstore()
            .expect("Application should build successfully")
    );

    let listed = app.get("/books").await;
    let added = app.post("/books", Some(r#"{"title":"Rust in Action","author":"T. McNamara","price":39.99}"#)).await;
    let broken = app.post("/books", Some("{bad")).await;
    let fallback = app.get("/").await;

    for response in [&listed, &added, &broken, &fallback] {
        println!("{} {}", response.status_code, response.body);
    }

    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(added.status(), StatusCode::CREATED);
    assert_eq!(broken.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(fallback.status(), StatusCode::OK);
}
