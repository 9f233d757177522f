use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::email::EmailMessage;

pub const MISSING_EMAIL_OR_NAME: &str = "Missing email or name";
pub const MISSING_EMAIL: &str = "Thiếu email!";
pub const INVALID_JSON: &str = "Invalid JSON format";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const EMAIL_SENT: &str = "Email sent successfully!";
pub const DISPATCH_FAILED: &str = "Failed to send email";

/// Which client contract a request arrived through. The two routes differ in
/// validation policy, message template and payload shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contract {
  /// `/api/send-mail`: email and name required, `{message}` / `{error}` bodies.
  Function,
  /// `/send-mail`: only email required, `{success, ...}` bodies.
  Server,
}

impl Contract {
  pub fn subject(self) -> &'static str {
    match self {
      Contract::Function => "Chúc mừng đăng ký thành công",
      Contract::Server => "Đăng ký tài khoản thành công 🎉",
    }
  }

  pub fn render_body(self, name: &str) -> String {
    match self {
      Contract::Function => format!("Chào {},\nCảm ơn bạn đã đăng ký!", name),
      Contract::Server => format!("Xin chào {}! Bạn đã đăng ký thành công tài khoản GG Classroom.", name),
    }
  }

  pub fn missing_fields_message(self) -> &'static str {
    match self {
      Contract::Function => MISSING_EMAIL_OR_NAME,
      Contract::Server => MISSING_EMAIL,
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct FunctionMailRequest {
  #[validate(required, length(min = 1))]
  pub email: Option<String>,
  #[validate(required, length(min = 1))]
  pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ServerMailRequest {
  #[validate(required, length(min = 1))]
  pub email: Option<String>,
  pub name: Option<String>,
}

/// A validated recipient, alive only for the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationNotice {
  pub email: String,
  pub name: String,
}

impl RegistrationNotice {
  pub fn compose(&self, contract: Contract, sender_name: &str) -> EmailMessage {
    let from_name = match contract {
      Contract::Function => None,
      Contract::Server => Some(sender_name.to_string()),
    };

    EmailMessage::new(
      from_name,
      self.email.clone(),
      contract.subject().to_string(),
      contract.render_body(&self.name),
    )
  }
}

impl TryFrom<FunctionMailRequest> for RegistrationNotice {
  type Error = validator::ValidationErrors;

  fn try_from(req: FunctionMailRequest) -> Result<Self, Self::Error> {
    req.validate()?;

    Ok(RegistrationNotice {
      email: req.email.unwrap_or_default(),
      name: req.name.unwrap_or_default(),
    })
  }
}

impl TryFrom<ServerMailRequest> for RegistrationNotice {
  type Error = validator::ValidationErrors;

  fn try_from(req: ServerMailRequest) -> Result<Self, Self::Error> {
    req.validate()?;

    Ok(RegistrationNotice {
      email: req.email.unwrap_or_default(),
      name: req.name.unwrap_or_default(),
    })
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FunctionMailResponse {
  pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerMailResponse {
  pub success: bool,
}
