#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use crate::{
    domains::registration::{
      model::{FunctionMailRequest, ServerMailRequest},
      service::{NoticeService, NoticeServiceError, NoticeServiceImpl},
    },
    email::{DeliveryReceipt, DispatchError, EmailMessage, MockMailer},
  };

  fn receipt() -> DeliveryReceipt {
    DeliveryReceipt {
      message_id: "<test@example.com>".to_string(),
      relay_response: "2.0.0 OK".to_string(),
    }
  }

  fn function_request(email: Option<&str>, name: Option<&str>) -> FunctionMailRequest {
    FunctionMailRequest {
      email: email.map(str::to_string),
      name: name.map(str::to_string),
    }
  }

  #[tokio::test]
  async fn test_function_notice_success() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer
      .expect_send()
      .withf(|message: &EmailMessage| {
        message.to == "a@b.com" && message.body.contains("Alice") && message.from_name.is_none()
      })
      .times(1)
      .returning(|_| Ok(receipt()));

    let service = NoticeServiceImpl::new(Arc::new(mock_mailer), "GG Classroom");

    let result = service
      .send_function_notice(function_request(Some("a@b.com"), Some("Alice")))
      .await;
    assert_eq!(result.unwrap(), receipt());
  }

  #[tokio::test]
  async fn test_function_notice_missing_name_skips_dispatch() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer.expect_send().times(0);

    let service = NoticeServiceImpl::new(Arc::new(mock_mailer), "GG Classroom");

    let result = service.send_function_notice(function_request(Some("a@b.com"), None)).await;
    match result {
      Err(NoticeServiceError::ValidationError(msg)) => assert_eq!(msg, "Missing email or name"),
      _ => panic!("Expected ValidationError"),
    }
  }

  #[tokio::test]
  async fn test_server_notice_defaults_name_and_uses_sender_name() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer
      .expect_send()
      .withf(|message: &EmailMessage| {
        message.from_name.as_deref() == Some("GG Classroom") && message.body.starts_with("Xin chào !")
      })
      .times(1)
      .returning(|_| Ok(receipt()));

    let service = NoticeServiceImpl::new(Arc::new(mock_mailer), "GG Classroom");

    let req = ServerMailRequest {
      email: Some("a@b.com".to_string()),
      name: None,
    };
    assert!(service.send_server_notice(req).await.is_ok());
  }

  #[tokio::test]
  async fn test_server_notice_missing_email() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer.expect_send().times(0);

    let service = NoticeServiceImpl::new(Arc::new(mock_mailer), "GG Classroom");

    let req = ServerMailRequest {
      email: None,
      name: Some("Alice".to_string()),
    };
    match service.send_server_notice(req).await {
      Err(NoticeServiceError::ValidationError(msg)) => assert_eq!(msg, "Thiếu email!"),
      _ => panic!("Expected ValidationError"),
    }
  }

  #[tokio::test]
  async fn test_dispatch_failure_is_reported_once() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer
      .expect_send()
      .times(1)
      .returning(|_| Err(DispatchError::Transport("relay down".to_string())));

    let service = NoticeServiceImpl::new(Arc::new(mock_mailer), "GG Classroom");

    let result = service
      .send_function_notice(function_request(Some("a@b.com"), Some("Alice")))
      .await;
    match result {
      Err(NoticeServiceError::DispatchError(e)) => assert!(e.to_string().contains("relay down")),
      _ => panic!("Expected DispatchError"),
    }
  }

  #[tokio::test]
  async fn test_repeated_requests_dispatch_independently() {
    let mut mock_mailer = MockMailer::new();
    mock_mailer.expect_send().times(2).returning(|_| Ok(receipt()));

    let service = NoticeServiceImpl::new(Arc::new(mock_mailer), "GG Classroom");

    for _ in 0..2 {
      let result = service
        .send_function_notice(function_request(Some("a@b.com"), Some("Alice")))
        .await;
      assert!(result.is_ok());
    }
  }
}
