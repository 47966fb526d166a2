/// Common test utilities and fixtures
use axum::{body::Body, http::Request, response::Response, Router};
use folio_core::{record, ContactSender, Inbox, SimulatedSender};
use folio_server::{create_router, AppState};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

/// Router over the static record with a fast simulated sender
pub fn create_test_app() -> (Router, Arc<Inbox>) {
    let inbox = Arc::new(Inbox::new(10));
    let sender = SimulatedSender::new(Duration::from_millis(1)).with_inbox(Arc::clone(&inbox));
    let app = create_router(AppState::new(
        record::portfolio(),
        Arc::new(sender),
        Arc::clone(&inbox),
    ));
    (app, inbox)
}

/// Router using a caller-provided sender
pub fn create_app_with_sender(sender: Arc<dyn ContactSender>) -> Router {
    create_router(AppState::new(
        record::portfolio(),
        sender,
        Arc::new(Inbox::default()),
    ))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Contact fixtures
pub mod fixtures {
    pub const NAME: &str = "Jane";
    pub const EMAIL: &str = "jane@x.com";
    pub const SUBJECT: &str = "Hi";
    pub const MESSAGE: &str = "Hello";
}
