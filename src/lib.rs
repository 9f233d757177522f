pub mod app;
pub mod config;
pub mod domains;
pub mod email;
pub mod error;
pub mod state;

#[cfg(test)]
mod test_support;

pub use error::AppError;
