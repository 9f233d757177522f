use std::{env, fmt};

use crate::email::SmtpConfig;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SENDER_NAME: &str = "GG Classroom";

#[derive(Debug, Clone)]
pub struct Config {
  pub host: String,
  pub port: u16,
  pub smtp: SmtpConfig,
  /// Display name used by the `/send-mail` notice.
  pub sender_name: String,
  /// Echo the relay's error text back to callers on dispatch failure.
  pub expose_relay_errors: bool,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let username = required(&lookup, "GMAIL_USER")?;
    let password = required(&lookup, "GMAIL_PASS")?;
    let from_email = lookup("MAIL_FROM")
      .filter(|value| !value.is_empty())
      .unwrap_or_else(|| username.clone());

    let smtp = SmtpConfig {
      host: lookup("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
      port: port(&lookup, "SMTP_PORT", 587)?,
      username,
      password,
      from_email,
    };

    Ok(Config {
      host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
      port: port(&lookup, "PORT", DEFAULT_PORT)?,
      smtp,
      sender_name: lookup("MAIL_FROM_NAME").unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string()),
      expose_relay_errors: flag(&lookup, "EXPOSE_RELAY_ERRORS")?,
    })
  }

  pub fn server_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
  F: Fn(&str) -> Option<String>,
{
  lookup(key)
    .filter(|value| !value.is_empty())
    .ok_or(ConfigError::Missing(key))
}

fn port<F>(lookup: &F, key: &'static str, default: u16) -> Result<u16, ConfigError>
where
  F: Fn(&str) -> Option<String>,
{
  match lookup(key) {
    Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort(key, value)),
    None => Ok(default),
  }
}

fn flag<F>(lookup: &F, key: &'static str) -> Result<bool, ConfigError>
where
  F: Fn(&str) -> Option<String>,
{
  match lookup(key).as_deref().map(str::trim) {
    None | Some("") => Ok(false),
    Some("1") | Some("true") | Some("TRUE") | Some("yes") => Ok(true),
    Some("0") | Some("false") | Some("FALSE") | Some("no") => Ok(false),
    Some(other) => Err(ConfigError::InvalidFlag(key, other.to_string())),
  }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
  Missing(&'static str),
  InvalidPort(&'static str, String),
  InvalidFlag(&'static str, String),
}

impl std::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Missing(key) => write!(f, "{} environment variable must be set", key),
      ConfigError::InvalidPort(key, value) => write!(f, "{} is not a valid port: {}", key, value),
      ConfigError::InvalidFlag(key, value) => write!(f, "{} is not a valid boolean: {}", key, value),
    }
  }
}
