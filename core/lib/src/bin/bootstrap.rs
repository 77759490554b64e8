use bookstore_api::{
    Application,
    RequestEvent,
    ResponseEnvelope,
    logging,
};
use lambda_runtime::{
    Error,
    LambdaEvent,
    service_fn,
};
use serde_json::Value;
use tracing::info;


// not a runnable binary outside of the lambda runtime; use
// `TestApplication` to drive the handler locally
#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init()?;

    let app = Application::bookstore()?;
    let app = &app;

    info!(routes = app.routes().len(), "bookstore handler starting");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let response: ResponseEnvelope = app
            .handle(RequestEvent::from_value(&event.payload))
            .await;

        Ok::<ResponseEnvelope, Error>(response)
    }))
    .await
}
