use serde::{Deserialize, Serialize};

use super::scoring::Recommendation;

/// Identifier wrapper for persisted quiz results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResultId(pub String);

impl std::fmt::Display for ResultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Respondent's choice for one question, matched against option labels verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(alias = "questionId")]
    pub question_id: u32,
    #[serde(alias = "answer")]
    pub selected_label: String,
}

impl Answer {
    pub fn new(question_id: u32, selected_label: impl Into<String>) -> Self {
        Self {
            question_id,
            selected_label: selected_label.into(),
        }
    }
}

/// Answer with the prompt and weight captured at scoring time.
///
/// Unresolved answers keep their label for audit but carry an empty prompt and zero weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question_id: u32,
    pub prompt: String,
    pub selected_label: String,
    pub weight: u32,
}

impl ScoredAnswer {
    pub fn is_resolved(&self) -> bool {
        self.weight > 0
    }
}

/// Immutable outcome of a single quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub respondent_name: String,
    pub respondent_email: String,
    pub scored_answers: Vec<ScoredAnswer>,
    pub total_score: u32,
    pub dominant_trait: String,
    pub recommendation: Recommendation,
}

impl QuizResult {
    /// The recommendation as a flat JSON document for storage columns that hold text.
    pub fn recommendation_document(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.recommendation)
    }

    pub fn unresolved_answers(&self) -> impl Iterator<Item = &ScoredAnswer> {
        self.scored_answers
            .iter()
            .filter(|answer| !answer.is_resolved())
    }
}
