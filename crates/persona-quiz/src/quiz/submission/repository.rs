use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::domain::{QuizResult, ResultId};
use super::super::scoring::Recommendation;

/// Stored snapshot of a scored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResultRecord {
    pub id: ResultId,
    pub created_at: DateTime<Utc>,
    pub result: QuizResult,
}

impl QuizResultRecord {
    pub fn view(&self) -> QuizResultView {
        QuizResultView {
            id: self.id.clone(),
            name: self.result.respondent_name.clone(),
            email: self.result.respondent_email.clone(),
            total_score: self.result.total_score,
            personality_type: self.result.dominant_trait.clone(),
            recommendation: self.result.recommendation.clone(),
            created_at: self.created_at,
        }
    }
}

/// Storage abstraction so the service can run against any backend.
pub trait ResultRepository: Send + Sync {
    fn insert(&self, record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError>;
    fn fetch(&self, id: &ResultId) -> Result<Option<QuizResultRecord>, RepositoryError>;
    /// Newest first, at most `limit` records.
    fn recent(&self, limit: usize) -> Result<Vec<QuizResultRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Respondent-facing summary of a stored result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResultView {
    pub id: ResultId,
    pub name: String,
    pub email: String,
    pub total_score: u32,
    pub personality_type: String,
    pub recommendation: Recommendation,
    pub created_at: DateTime<Utc>,
}
