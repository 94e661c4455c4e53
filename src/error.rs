//! Domain errors for the session lifecycle and form submission.
//! Every variant is an expected outcome that maps to exactly one reply.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("user already has an active session")]
    AlreadyActive,

    #[error("user has no active session")]
    NoActiveSession,
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("form endpoint answered with status {0}")]
    Status(StatusCode),

    #[error("form request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
