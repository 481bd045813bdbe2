//! Service-level errors. Catalog misses never land here; they become fallback questions.

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PracticeError {
  #[error("unknown session: {0}")]
  UnknownSession(String),
  #[error("option {option} is out of range (question has {len} options)")]
  OptionOutOfRange { option: usize, len: usize },
  #[error("question {0} was already answered")]
  AlreadyAnswered(String),
  #[error("batch of {requested} exceeds the limit of {max}")]
  BatchTooLarge { requested: usize, max: usize },
}

impl PracticeError {
  pub fn code(&self) -> &'static str {
    match self {
      PracticeError::UnknownSession(_) => "unknown_session",
      PracticeError::OptionOutOfRange { .. } => "option_out_of_range",
      PracticeError::AlreadyAnswered(_) => "already_answered",
      PracticeError::BatchTooLarge { .. } => "batch_too_large",
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      PracticeError::UnknownSession(_) => StatusCode::NOT_FOUND,
      PracticeError::AlreadyAnswered(_) => StatusCode::CONFLICT,
      PracticeError::OptionOutOfRange { .. } | PracticeError::BatchTooLarge { .. } => StatusCode::BAD_REQUEST,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
  pub code: &'static str,
  pub message: String,
}

impl IntoResponse for PracticeError {
  fn into_response(self) -> Response {
    let body = ErrorBody { error: ErrorPayload { code: self.code(), message: self.to_string() } };
    (self.status(), Json(body)).into_response()
  }
}
