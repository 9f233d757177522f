use axum::{
  extract::{rejection::JsonRejection, Json, State},
  http::{header::CONTENT_TYPE, Method, StatusCode},
  response::{IntoResponse, Json as JsonResponse, Response},
  routing::{any, post},
  Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::model::{
  Contract, FunctionMailRequest, FunctionMailResponse, ServerMailRequest, ServerMailResponse, EMAIL_SENT,
};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub const FUNCTION_SEND_MAIL_PATH: &str = "/api/send-mail";
pub const SERVER_SEND_MAIL_PATH: &str = "/send-mail";

/// Every method reaches the handler so it can answer OPTIONS and 405 itself.
pub fn function_routes() -> Router<SharedAppState> {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::POST, Method::OPTIONS])
    .allow_headers([CONTENT_TYPE]);

  Router::new()
    .route(FUNCTION_SEND_MAIL_PATH, any(function_send_mail_handler))
    .layer(cors)
}

pub fn server_routes() -> Router<SharedAppState> {
  let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

  Router::new()
    .route(SERVER_SEND_MAIL_PATH, post(server_send_mail_handler))
    .layer(cors)
}

pub async fn function_send_mail_handler(
  State(state): State<SharedAppState>,
  method: Method,
  payload: Result<Json<FunctionMailRequest>, JsonRejection>,
) -> Result<Response, AppError> {
  if method == Method::OPTIONS {
    return Ok(StatusCode::OK.into_response());
  }

  if method != Method::POST {
    return Err(AppError::method_not_allowed(Contract::Function));
  }

  let Json(payload) = payload.map_err(|e| AppError::invalid_json(Contract::Function, e))?;

  state
    .send_function_notice(payload)
    .await
    .map(|_| {
      JsonResponse(FunctionMailResponse {
        message: EMAIL_SENT.to_string(),
      })
      .into_response()
    })
    .map_err(|e| AppError::from_notice_error(Contract::Function, e, state.expose_relay_errors()))
}

pub async fn server_send_mail_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<ServerMailRequest>, JsonRejection>,
) -> Result<JsonResponse<ServerMailResponse>, AppError> {
  let Json(payload) = payload.map_err(|e| AppError::invalid_json(Contract::Server, e))?;

  state
    .send_server_notice(payload)
    .await
    .map(|_| JsonResponse(ServerMailResponse { success: true }))
    .map_err(|e| AppError::from_notice_error(Contract::Server, e, state.expose_relay_errors()))
}
