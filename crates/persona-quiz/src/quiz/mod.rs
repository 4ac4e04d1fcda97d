pub mod catalog;
pub mod domain;
pub mod notification;
pub mod profiles;
pub mod scoring;
pub mod submission;

pub use catalog::{CatalogError, Question, QuestionCatalog, QuestionOption};
pub use domain::{Answer, QuizResult, ResultId, ScoredAnswer};
pub use profiles::{ProfileTable, RecommendationProfile};
pub use scoring::{Level, Recommendation, ScoreSheet, ScoringEngine, TraitTally, DEFAULT_TRAIT};
