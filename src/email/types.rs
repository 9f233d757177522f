use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
    }
  }
}

impl fmt::Debug for SmtpConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SmtpConfig")
      .field("host", &self.host)
      .field("port", &self.port)
      .field("username", &self.username)
      .field("password", &"[redacted]")
      .field("from_email", &self.from_email)
      .finish()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
  /// Display name shown next to the configured sender address.
  pub from_name: Option<String>,
  pub to: String,
  pub subject: String,
  pub body: String,
}

impl EmailMessage {
  pub fn new(from_name: Option<String>, to: String, subject: String, body: String) -> Self {
    EmailMessage {
      from_name,
      to,
      subject,
      body,
    }
  }
}

/// Acknowledgement handed back by the relay for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
  pub message_id: String,
  pub relay_response: String,
}

#[derive(Debug)]
pub enum DispatchError {
  InvalidAddress(String),
  Compose(String),
  Transport(String),
}

impl std::error::Error for DispatchError {}

impl fmt::Display for DispatchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DispatchError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
      DispatchError::Compose(msg) => write!(f, "Failed to compose message: {}", msg),
      DispatchError::Transport(msg) => write!(f, "Mail relay error: {}", msg),
    }
  }
}

impl From<lettre::address::AddressError> for DispatchError {
  fn from(err: lettre::address::AddressError) -> Self {
    DispatchError::InvalidAddress(err.to_string())
  }
}

impl From<lettre::error::Error> for DispatchError {
  fn from(err: lettre::error::Error) -> Self {
    DispatchError::Compose(err.to_string())
  }
}

impl From<lettre::transport::smtp::Error> for DispatchError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    DispatchError::Transport(err.to_string())
  }
}
