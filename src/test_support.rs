use std::sync::Arc;

use axum::{
  body::{Body, Bytes},
  http::{Method, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{app::create_app, email::Mailer, state::SharedAppState};

pub fn app_with_mailer(mailer: impl Mailer + 'static, expose_relay_errors: bool) -> Router {
  let state = SharedAppState::new(Arc::new(mailer), "GG Classroom", expose_relay_errors);
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  oneshot(app, request).await
}

pub async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  oneshot(app, request).await
}

async fn oneshot(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
