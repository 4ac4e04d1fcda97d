//! Answer resolution, trait tallying, and recommendation lookup.
//!
//! Scoring never fails on individual answers: an answer that does not resolve against the
//! catalog is kept for audit with zero weight. When nothing resolves the respondent is
//! classified as [`DEFAULT_TRAIT`], which maps to the fallback profile.

mod recommend;
mod tally;

pub use recommend::{Level, Recommendation};
pub use tally::{TraitTally, TraitWeight};

use serde::Serialize;
use tracing::debug;

use super::catalog::QuestionCatalog;
use super::domain::{Answer, QuizResult, ScoredAnswer};
use super::profiles::ProfileTable;

/// Trait assigned when no answer resolves to a catalog option.
pub const DEFAULT_TRAIT: &str = "balanced";

/// Output of the resolve-and-tally stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSheet {
    pub scored_answers: Vec<ScoredAnswer>,
    pub total_score: u32,
    pub dominant_trait: String,
    pub tally: TraitTally,
}

/// Stateless engine over a read-only catalog and profile table.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    catalog: &'a QuestionCatalog,
    profiles: &'a ProfileTable,
}

impl ScoringEngine<'static> {
    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard(), ProfileTable::standard())
    }
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a QuestionCatalog, profiles: &'a ProfileTable) -> Self {
        Self { catalog, profiles }
    }

    pub fn catalog(&self) -> &'a QuestionCatalog {
        self.catalog
    }

    pub fn score(&self, answers: &[Answer]) -> ScoreSheet {
        let mut tally = TraitTally::default();
        let mut total_score = 0;

        let scored_answers = answers
            .iter()
            .map(|answer| {
                let resolved = self
                    .catalog
                    .get_question(answer.question_id)
                    .and_then(|question| {
                        question
                            .option(&answer.selected_label)
                            .map(|option| (question, option))
                    });

                match resolved {
                    Some((question, option)) => {
                        tally.add(option.trait_tag, option.weight);
                        total_score += option.weight;
                        ScoredAnswer {
                            question_id: answer.question_id,
                            prompt: question.prompt.to_string(),
                            selected_label: answer.selected_label.clone(),
                            weight: option.weight,
                        }
                    }
                    None => {
                        debug!(
                            question_id = answer.question_id,
                            label = %answer.selected_label,
                            "answer does not match the catalog; scoring it as zero"
                        );
                        ScoredAnswer {
                            question_id: answer.question_id,
                            prompt: String::new(),
                            selected_label: answer.selected_label.clone(),
                            weight: 0,
                        }
                    }
                }
            })
            .collect();

        let dominant_trait = tally.dominant().unwrap_or(DEFAULT_TRAIT).to_string();

        ScoreSheet {
            scored_answers,
            total_score,
            dominant_trait,
            tally,
        }
    }

    pub fn recommend(&self, dominant_trait: &str, total_score: u32) -> Recommendation {
        recommend::recommend(self.profiles, dominant_trait, total_score)
    }

    /// Score and classify in one pass, producing the immutable result record.
    pub fn evaluate(
        &self,
        respondent_name: impl Into<String>,
        respondent_email: impl Into<String>,
        answers: &[Answer],
    ) -> QuizResult {
        let sheet = self.score(answers);
        let recommendation = self.recommend(&sheet.dominant_trait, sheet.total_score);

        QuizResult {
            respondent_name: respondent_name.into(),
            respondent_email: respondent_email.into(),
            scored_answers: sheet.scored_answers,
            total_score: sheet.total_score,
            dominant_trait: sheet.dominant_trait,
            recommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::{Question, QuestionOption};

    fn canonical_answers() -> Vec<Answer> {
        vec![
            Answer::new(1, "Reading a book or learning something new"),
            Answer::new(2, "Take the lead and organize everything"),
            Answer::new(3, "Leadership and management abilities"),
            Answer::new(4, "Flexible remote work with autonomy"),
            Answer::new(5, "Break it down systematically step by step"),
        ]
    }

    #[test]
    fn canonical_answers_score_as_advanced_leader() {
        let engine = ScoringEngine::standard();
        let sheet = engine.score(&canonical_answers());

        let weights: Vec<u32> = sheet.scored_answers.iter().map(|a| a.weight).collect();
        assert_eq!(weights, [2, 3, 3, 3, 3]);
        assert_eq!(sheet.total_score, 14);
        assert_eq!(sheet.tally.get("introvert"), Some(2));
        assert_eq!(sheet.tally.get("leadership"), Some(3));
        assert_eq!(sheet.dominant_trait, "leader");

        let recommendation = engine.recommend(&sheet.dominant_trait, sheet.total_score);
        assert_eq!(recommendation.title(), "Natural Leader");
        assert_eq!(recommendation.level, Level::Advanced);
        assert_eq!(recommendation.score, 14);
    }

    #[test]
    fn tie_goes_to_earliest_answer_in_input_order() {
        let mut answers = canonical_answers();
        answers.swap(1, 3);

        let sheet = ScoringEngine::standard().score(&answers);
        assert_eq!(sheet.dominant_trait, "autonomous");
        assert_eq!(sheet.total_score, 14);
    }

    #[test]
    fn unknown_option_is_kept_with_zero_weight_and_empty_prompt() {
        let mut answers = canonical_answers();
        answers[2].selected_label = "Juggling".to_string();

        let sheet = ScoringEngine::standard().score(&answers);
        let unresolved = &sheet.scored_answers[2];
        assert_eq!(unresolved.question_id, 3);
        assert_eq!(unresolved.selected_label, "Juggling");
        assert_eq!(unresolved.prompt, "");
        assert_eq!(unresolved.weight, 0);
        assert_eq!(sheet.total_score, 11);
        assert_eq!(sheet.dominant_trait, "leader");
        assert!(sheet.tally.get("leadership").is_none());
    }

    #[test]
    fn unknown_question_contributes_nothing() {
        let answers = vec![
            Answer::new(42, "Take the lead and organize everything"),
            Answer::new(1, "Socializing with friends and family"),
        ];

        let sheet = ScoringEngine::standard().score(&answers);
        assert_eq!(sheet.total_score, 2);
        assert_eq!(sheet.dominant_trait, "extrovert");
        assert_eq!(sheet.scored_answers.len(), 2);
    }

    #[test]
    fn no_resolved_answers_defaults_to_balanced_fallback() {
        let engine = ScoringEngine::standard();
        let result = engine.evaluate(
            "Ada",
            "ada@example.com",
            &[Answer::new(1, "Sleeping in"), Answer::new(8, "Anything")],
        );

        assert_eq!(result.total_score, 0);
        assert_eq!(result.dominant_trait, DEFAULT_TRAIT);
        assert_eq!(result.recommendation.title(), "Versatile Professional");
        assert_eq!(result.recommendation.level, Level::Beginner);
        assert_eq!(result.unresolved_answers().count(), 2);
    }

    #[test]
    fn empty_answer_list_is_scored_not_rejected() {
        let sheet = ScoringEngine::standard().score(&[]);
        assert!(sheet.scored_answers.is_empty());
        assert_eq!(sheet.dominant_trait, DEFAULT_TRAIT);
    }

    #[test]
    fn recommend_is_repeatable() {
        let engine = ScoringEngine::standard();
        assert_eq!(engine.recommend("creative", 10), engine.recommend("creative", 10));
        assert_eq!(engine.recommend("introvert", 10).title(), "Versatile Professional");
    }

    #[test]
    fn works_against_alternate_catalogs() {
        let catalog = QuestionCatalog::new(vec![Question {
            id: 10,
            prompt: "Pick one",
            options: vec![QuestionOption {
                label: "Left",
                trait_tag: "technical",
                weight: 8,
            }],
        }])
        .expect("valid catalog");
        let engine = ScoringEngine::new(&catalog, ProfileTable::standard());

        let result = engine.evaluate("Lin", "lin@example.com", &[Answer::new(10, "Left")]);
        assert_eq!(result.dominant_trait, "technical");
        assert_eq!(result.recommendation.level, Level::Intermediate);
        assert_eq!(result.scored_answers[0].prompt, "Pick one");
    }
}
