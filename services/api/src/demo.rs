use crate::infra::InMemoryResultRepository;
use clap::Args;
use persona_quiz::error::AppError;
use persona_quiz::quiz::notification::{LogNotifier, NotificationStatus};
use persona_quiz::quiz::submission::{QuizSubmission, QuizSubmissionService};
use persona_quiz::quiz::{Answer, QuizResult, ScoringEngine};
use serde_json::json;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Respondent name used in the recommendation output
    #[arg(long)]
    pub(crate) name: String,
    /// Respondent email used in the recommendation output
    #[arg(long)]
    pub(crate) email: String,
    /// Answer as QUESTION_ID=LABEL; repeat once per question
    #[arg(long, value_parser = crate::infra::parse_answer)]
    pub(crate) answer: Vec<Answer>,
    /// Emit the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Respondent name for the demo submission
    #[arg(long, default_value = "Jordan Rivera")]
    pub(crate) name: String,
    /// Respondent email for the demo submission
    #[arg(long, default_value = "jordan@example.com")]
    pub(crate) email: String,
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let catalog = ScoringEngine::standard().catalog();
    println!(
        "Personality quiz: {} questions (max score {})",
        catalog.len(),
        catalog.max_score()
    );
    for question in catalog.questions() {
        println!("\n{}. {}", question.id, question.prompt);
        for option in &question.options {
            println!(
                "  - {} [{} +{}]",
                option.label, option.trait_tag, option.weight
            );
        }
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        name,
        email,
        answer,
        json,
    } = args;

    let engine = ScoringEngine::standard();
    let result = engine.evaluate(name, email, &answer);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result(&result, engine.catalog().max_score());
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { name, email } = args;

    let repository = Arc::new(InMemoryResultRepository::default());
    let service = QuizSubmissionService::new(repository, Arc::new(LogNotifier));
    let max_score = service.engine().catalog().max_score();

    println!("Personality quiz demo");
    let receipt = service.submit(QuizSubmission {
        name,
        email,
        answers: canonical_answers(),
    })?;

    println!("Stored result {} at {}", receipt.record.id, receipt.record.created_at);
    render_result(&receipt.record.result, max_score);

    let notification = match &receipt.notification {
        NotificationStatus::Delivered { message_id } => match message_id {
            Some(id) => format!("delivered ({id})"),
            None => "delivered".to_string(),
        },
        NotificationStatus::Simulated => "simulated (mail delivery disabled)".to_string(),
        NotificationStatus::Failed { reason } => format!("failed: {reason}"),
    };
    println!("\nNotification: {notification}");

    let recent = service.recent(5)?;
    println!("\nRecent results ({}):", recent.len());
    for record in &recent {
        let view = record.view();
        println!("{}", json!(view));
    }
    Ok(())
}

fn canonical_answers() -> Vec<Answer> {
    vec![
        Answer::new(1, "Reading a book or learning something new"),
        Answer::new(2, "Take the lead and organize everything"),
        Answer::new(3, "Leadership and management abilities"),
        Answer::new(4, "Flexible remote work with autonomy"),
        Answer::new(5, "Break it down systematically step by step"),
    ]
}

fn render_result(result: &QuizResult, max_score: u32) {
    let recommendation = &result.recommendation;
    println!(
        "\n{} <{}>",
        result.respondent_name, result.respondent_email
    );
    println!(
        "Personality type: {} | Score {}/{} ({} Level)",
        result.dominant_trait,
        result.total_score,
        max_score,
        recommendation.level.label()
    );
    println!("Answers:");
    for answer in &result.scored_answers {
        let marker = if answer.is_resolved() { "" } else { " (unmatched)" };
        println!(
            "  - Q{}: {} +{}{}",
            answer.question_id, answer.selected_label, answer.weight, marker
        );
    }
    println!("\n{}", recommendation.title());
    println!("{}", recommendation.profile.description);
    for (index, suggestion) in recommendation.profile.suggestions.iter().enumerate() {
        println!("  {}. {}", index + 1, suggestion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_quiz::quiz::Level;

    #[test]
    fn canonical_demo_answers_cover_the_catalog() {
        let engine = ScoringEngine::standard();
        let answers = canonical_answers();
        assert_eq!(answers.len(), engine.catalog().len());

        let result = engine.evaluate("Jordan Rivera", "jordan@example.com", &answers);
        assert_eq!(result.total_score, 14);
        assert_eq!(result.dominant_trait, "leader");
        assert_eq!(result.recommendation.level, Level::Advanced);
        assert_eq!(result.unresolved_answers().count(), 0);
    }

    #[test]
    fn demo_runs_against_in_memory_service() {
        run_demo(DemoArgs {
            name: "Jordan Rivera".to_string(),
            email: "jordan@example.com".to_string(),
        })
        .expect("demo completes");
    }

    #[test]
    fn score_accepts_partial_answer_sets() {
        run_score(ScoreArgs {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            answer: vec![Answer::new(9, "unknown")],
            json: true,
        })
        .expect("scores");
    }
}
