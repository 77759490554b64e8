use crate::{
    Application,
    request::RequestEvent,
    response::ResponseEnvelope,
};


/// Drives an [`Application`] in process with hand-built events.
pub struct TestApplication(Application);


impl TestApplication {
    pub fn new(app: Application) -> Self {
        Self(app)
    }

    pub async fn call(&self, event: RequestEvent) -> ResponseEnvelope {
        self.0
            .handle(event)
            .await
    }

    pub async fn request<M: AsRef<str>, R: AsRef<str>>(&self, method: M, resource: R, body: Option<&str>) -> ResponseEnvelope {
        let mut event = RequestEvent::new(method.as_ref(), resource.as_ref());

        if let Some(body) = body {
            event = event.with_body(body);
        }

        self
            .call(event)
            .await
    }

    pub async fn get<R: AsRef<str>>(&self, resource: R) -> ResponseEnvelope {
        self
            .request("GET", resource, None)
            .await
    }

    pub async fn post<R: AsRef<str>>(&self, resource: R, body: Option<&str>) -> ResponseEnvelope {
        self
            .request("POST", resource, body)
            .await
    }

    pub async fn options<R: AsRef<str>>(&self, resource: R) -> ResponseEnvelope {
        self
            .request("OPTIONS", resource, None)
            .await
    }
}
