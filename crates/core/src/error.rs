use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("Not found: slot type code {code}")]
  NotFound { code: u32 },

  #[error("Failed to parse schema {}: {source}", .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Failed to read schema {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to write schema {}: {source}", .path.display())]
  Persist {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Invalid input: expected {expected}, got {input:?}")]
  InvalidInput { expected: &'static str, input: String },

  #[error("Input closed before the session finished")]
  InputClosed,

  #[error("Config {}: {message}", .path.display())]
  Config { path: PathBuf, message: String },

  #[error("IO: {0}")]
  Io(#[from] std::io::Error),
}

impl Error {
  /// True for failures caused by what the operator typed (or didn't)
  pub fn is_input_failure(&self) -> bool {
    matches!(self, Error::InvalidInput { .. } | Error::InputClosed)
  }
}

pub type Result<T> = std::result::Result<T, Error>;
