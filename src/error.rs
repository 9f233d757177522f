use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::domains::registration::model::{Contract, DISPATCH_FAILED, INVALID_JSON, METHOD_NOT_ALLOWED};
use crate::domains::registration::service::NoticeServiceError;

/// Request failure rendered in the JSON shape of the contract it arrived on.
#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
  pub contract: Contract,
}

impl AppError {
  pub fn new(contract: Contract, status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
      contract,
    }
  }

  pub fn bad_request(contract: Contract, message: impl Into<String>) -> Self {
    Self::new(contract, StatusCode::BAD_REQUEST, message)
  }

  pub fn method_not_allowed(contract: Contract) -> Self {
    Self::new(contract, StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
  }

  pub fn internal_server_error(contract: Contract, message: impl Into<String>) -> Self {
    Self::new(contract, StatusCode::INTERNAL_SERVER_ERROR, message)
  }

  pub fn invalid_json(contract: Contract, rejection: impl std::fmt::Display) -> Self {
    tracing::warn!("JSON error: {}", rejection);
    Self::bad_request(contract, INVALID_JSON)
  }

  /// Relay text is only echoed back when `expose_relay_errors` is set.
  pub fn from_notice_error(contract: Contract, error: NoticeServiceError, expose_relay_errors: bool) -> Self {
    match error {
      NoticeServiceError::ValidationError(msg) => AppError::bad_request(contract, msg),
      NoticeServiceError::DispatchError(e) if expose_relay_errors => {
        AppError::internal_server_error(contract, e.to_string())
      }
      NoticeServiceError::DispatchError(_) => AppError::internal_server_error(contract, DISPATCH_FAILED),
    }
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = match self.contract {
      Contract::Function => json!({ "error": self.message }),
      Contract::Server if self.status_code.is_client_error() => json!({
        "success": false,
        "message": self.message,
      }),
      Contract::Server => json!({
        "success": false,
        "error": self.message,
      }),
    };

    (self.status_code, Json(body)).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}
