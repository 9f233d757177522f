use crate::email::types::{DeliveryReceipt, DispatchError, EmailMessage, SmtpConfig};
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::authentication::Credentials,
  Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use uuid::Uuid;

/// Port on which relays expect TLS from the first byte instead of STARTTLS.
const IMPLICIT_TLS_PORT: u16 = 465;

/// Submits composed messages to a mail relay. One call is one delivery attempt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, DispatchError>;
}

pub struct EmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else if smtp_config.port == IMPLICIT_TLS_PORT {
      AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    tracing::info!(
      host = %smtp_config.host,
      port = smtp_config.port,
      "Configured SMTP transport"
    );

    Ok(EmailService {
      smtp_config,
      transporter,
    })
  }
}

#[async_trait]
impl Mailer for EmailService {
  async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, DispatchError> {
    let (email, message_id) = compose_message(&self.smtp_config.from_email, message)?;

    let response = self.transporter.send(email).await?;
    let relay_response = response.message().collect::<Vec<_>>().join(" ");

    Ok(DeliveryReceipt {
      message_id,
      relay_response,
    })
  }
}

/// Builds the plaintext message and returns it with the generated `Message-ID`.
pub fn compose_message(from_email: &str, message: &EmailMessage) -> Result<(Message, String), DispatchError> {
  let sender: Address = from_email.parse()?;
  let message_id = format!("<{}@{}>", Uuid::new_v4(), sender.domain());
  let from = Mailbox::new(message.from_name.clone(), sender);
  let to: Mailbox = message.to.parse()?;

  let email = Message::builder()
    .from(from)
    .to(to)
    .subject(&message.subject)
    .message_id(Some(message_id.clone()))
    .header(ContentType::TEXT_PLAIN)
    .body(message.body.clone())?;

  Ok((email, message_id))
}
