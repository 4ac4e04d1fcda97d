//! Submission intake: validation, scoring, persistence, then notification.

pub mod repository;
pub mod router;
pub mod service;
mod validation;

#[cfg(test)]
mod tests;

pub use repository::{QuizResultRecord, QuizResultView, RepositoryError, ResultRepository};
pub use router::quiz_router;
pub use service::{QuizSubmissionService, SubmissionError, SubmissionReceipt};
pub use validation::{QuizSubmission, ValidationError};
