//! Email sending functionality module
//!
//! Messages are submitted to an SMTP relay through lettre. The [`Mailer`]
//! trait is the seam request handling depends on.

mod service;
mod types;

#[cfg(test)]
pub use service::MockMailer;
pub use service::{compose_message, EmailService, Mailer};
pub use types::{DeliveryReceipt, DispatchError, EmailMessage, SmtpConfig};
