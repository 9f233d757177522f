use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use registration_mailer::app::create_app;
use registration_mailer::config::Config;
use registration_mailer::email::EmailService;
use registration_mailer::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = Config::from_env().context("Failed to load configuration")?;

  let email_service = EmailService::new(config.smtp.clone()).context("Failed to configure SMTP transport")?;
  let app_state = SharedAppState::new(Arc::new(email_service), config.sender_name.clone(), config.expose_relay_errors);
  let app = create_app(app_state);

  let addr = config.server_addr();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .with_context(|| format!("Failed to bind {}", addr))?;

  tracing::info!("Server running on http://{}", addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
