use async_trait::async_trait;
use std::{error::Error, sync::Arc};

use super::model::{Contract, FunctionMailRequest, RegistrationNotice, ServerMailRequest};
use crate::email::{DeliveryReceipt, DispatchError, Mailer};

#[derive(Debug)]
pub enum NoticeServiceError {
  ValidationError(String),
  DispatchError(DispatchError),
}

impl Error for NoticeServiceError {}

impl std::fmt::Display for NoticeServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      NoticeServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      NoticeServiceError::DispatchError(err) => write!(f, "Dispatch Error: {}", err),
    }
  }
}

impl From<DispatchError> for NoticeServiceError {
  fn from(err: DispatchError) -> Self {
    NoticeServiceError::DispatchError(err)
  }
}

#[async_trait]
pub trait NoticeService: Send + Sync {
  async fn send_function_notice(&self, req: FunctionMailRequest) -> Result<DeliveryReceipt, NoticeServiceError>;
  async fn send_server_notice(&self, req: ServerMailRequest) -> Result<DeliveryReceipt, NoticeServiceError>;
}

pub struct NoticeServiceImpl {
  mailer: Arc<dyn Mailer>,
  sender_name: String,
}

impl NoticeServiceImpl {
  pub fn new(mailer: Arc<dyn Mailer>, sender_name: impl Into<String>) -> Self {
    Self {
      mailer,
      sender_name: sender_name.into(),
    }
  }

  async fn dispatch(
    &self,
    contract: Contract,
    notice: RegistrationNotice,
  ) -> Result<DeliveryReceipt, NoticeServiceError> {
    let message = notice.compose(contract, &self.sender_name);

    match self.mailer.send(&message).await {
      Ok(receipt) => {
        tracing::info!(
          ?contract,
          to = %notice.email,
          message_id = %receipt.message_id,
          "Registration email sent"
        );
        Ok(receipt)
      }
      Err(e) => {
        tracing::error!(?contract, to = %notice.email, error = %e, "Failed to send registration email");
        Err(e.into())
      }
    }
  }
}

#[async_trait]
impl NoticeService for NoticeServiceImpl {
  async fn send_function_notice(&self, req: FunctionMailRequest) -> Result<DeliveryReceipt, NoticeServiceError> {
    let notice = RegistrationNotice::try_from(req)
      .map_err(|_| NoticeServiceError::ValidationError(Contract::Function.missing_fields_message().to_string()))?;

    self.dispatch(Contract::Function, notice).await
  }

  async fn send_server_notice(&self, req: ServerMailRequest) -> Result<DeliveryReceipt, NoticeServiceError> {
    let notice = RegistrationNotice::try_from(req)
      .map_err(|_| NoticeServiceError::ValidationError(Contract::Server.missing_fields_message().to_string()))?;

    self.dispatch(Contract::Server, notice).await
  }
}
