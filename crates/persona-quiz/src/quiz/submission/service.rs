use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use super::super::domain::ResultId;
use super::super::notification::{
    NotificationError, NotificationPayload, NotificationStatus, ResultNotifier,
};
use super::super::scoring::ScoringEngine;
use super::repository::{QuizResultRecord, RepositoryError, ResultRepository};
use super::validation::{QuizSubmission, ValidationError};

/// Service composing validation, the scoring engine, storage, and notification.
pub struct QuizSubmissionService<R, N> {
    engine: ScoringEngine<'static>,
    repository: Arc<R>,
    notifier: Arc<N>,
}

static RESULT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_result_id() -> ResultId {
    let id = RESULT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ResultId(format!("quiz-{id:06}"))
}

/// Stored result plus the outcome of the follow-up notification.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub record: QuizResultRecord,
    pub notification: NotificationStatus,
}

impl<R, N> QuizSubmissionService<R, N>
where
    R: ResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self::with_engine(ScoringEngine::standard(), repository, notifier)
    }

    pub fn with_engine(engine: ScoringEngine<'static>, repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            engine,
            repository,
            notifier,
        }
    }

    pub fn engine(&self) -> &ScoringEngine<'static> {
        &self.engine
    }

    /// Score and store a submission, then notify the respondent.
    ///
    /// A failed notification is reported in the receipt and never undoes the stored result.
    pub fn submit(
        &self,
        submission: QuizSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let catalog = self.engine.catalog();
        let submission = submission.validate(catalog.len())?;

        let result = self
            .engine
            .evaluate(submission.name, submission.email, &submission.answers);

        let record = QuizResultRecord {
            id: next_result_id(),
            created_at: Utc::now(),
            result,
        };
        let stored = self.repository.insert(record)?;

        info!(
            result_id = %stored.id,
            total_score = stored.result.total_score,
            personality_type = %stored.result.dominant_trait,
            unresolved = stored.result.unresolved_answers().count(),
            "quiz result stored"
        );

        let payload = NotificationPayload::from_result(&stored.result, catalog.max_score());
        let notification = match self.notifier.notify(&payload) {
            Ok(receipt) => NotificationStatus::from(receipt),
            Err(err) => {
                warn!(result_id = %stored.id, error = %err, "quiz summary notification failed");
                NotificationStatus::Failed {
                    reason: err.to_string(),
                }
            }
        };

        Ok(SubmissionReceipt {
            record: stored,
            notification,
        })
    }

    /// Fetch a stored result for API responses.
    pub fn get(&self, id: &ResultId) -> Result<QuizResultRecord, SubmissionError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<QuizResultRecord>, SubmissionError> {
        Ok(self.repository.recent(limit)?)
    }

    /// Send a summary for an externally supplied payload.
    pub fn send_summary(
        &self,
        payload: &NotificationPayload,
    ) -> Result<NotificationStatus, NotificationError> {
        self.notifier.notify(payload).map(NotificationStatus::from)
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
