use std::sync::Arc;

use crate::{
  domains::registration::{
    model::{FunctionMailRequest, ServerMailRequest},
    service::{NoticeService, NoticeServiceError, NoticeServiceImpl},
  },
  email::{DeliveryReceipt, Mailer},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_function_notice(
    &self,
    req: FunctionMailRequest,
  ) -> impl std::future::Future<Output = Result<DeliveryReceipt, NoticeServiceError>> + Send;
  fn send_server_notice(
    &self,
    req: ServerMailRequest,
  ) -> impl std::future::Future<Output = Result<DeliveryReceipt, NoticeServiceError>> + Send;
  fn expose_relay_errors(&self) -> bool;
}

/// Built once at startup and shared read-only by every request.
#[derive(Clone)]
pub struct SharedAppState {
  pub notice_service: Arc<NoticeServiceImpl>,
  pub expose_relay_errors: bool,
}

impl SharedAppState {
  pub fn new(mailer: Arc<dyn Mailer>, sender_name: impl Into<String>, expose_relay_errors: bool) -> Self {
    let notice_service = Arc::new(NoticeServiceImpl::new(mailer, sender_name));

    Self {
      notice_service,
      expose_relay_errors,
    }
  }
}

impl AppState for SharedAppState {
  async fn send_function_notice(&self, req: FunctionMailRequest) -> Result<DeliveryReceipt, NoticeServiceError> {
    self.notice_service.send_function_notice(req).await
  }

  async fn send_server_notice(&self, req: ServerMailRequest) -> Result<DeliveryReceipt, NoticeServiceError> {
    self.notice_service.send_server_notice(req).await
  }

  fn expose_relay_errors(&self) -> bool {
    self.expose_relay_errors
  }
}
