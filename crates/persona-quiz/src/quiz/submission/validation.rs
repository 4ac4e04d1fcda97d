use serde::{Deserialize, Serialize};

use super::super::domain::Answer;

/// Raw submission as received from the quiz form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// Submission shape problems, rejected before scoring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("respondent name is required")]
    MissingName,
    #[error("respondent email is required")]
    MissingEmail,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("quiz is incomplete: expected {expected} answers, received {actual}")]
    IncompleteAnswers { expected: usize, actual: usize },
}

/// Submission with normalized respondent details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidatedSubmission {
    pub name: String,
    pub email: String,
    pub answers: Vec<Answer>,
}

impl QuizSubmission {
    pub(crate) fn validate(
        self,
        expected_answers: usize,
    ) -> Result<ValidatedSubmission, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !looks_like_email(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        if self.answers.len() != expected_answers {
            return Err(ValidationError::IncompleteAnswers {
                expected: expected_answers,
                actual: self.answers.len(),
            });
        }

        Ok(ValidatedSubmission {
            name: name.to_string(),
            email,
            answers: self.answers,
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(answer_count: u32) -> QuizSubmission {
        QuizSubmission {
            name: "  Mira Patel ".to_string(),
            email: " Mira@Example.COM".to_string(),
            answers: (1..=answer_count)
                .map(|id| Answer::new(id, "anything"))
                .collect(),
        }
    }

    #[test]
    fn normalizes_name_and_email() {
        let validated = submission(5).validate(5).expect("valid submission");
        assert_eq!(validated.name, "Mira Patel");
        assert_eq!(validated.email, "mira@example.com");
        assert_eq!(validated.answers.len(), 5);
    }

    #[test]
    fn rejects_blank_respondent_details() {
        let mut blank_name = submission(5);
        blank_name.name = "   ".to_string();
        assert_eq!(blank_name.validate(5), Err(ValidationError::MissingName));

        let mut blank_email = submission(5);
        blank_email.email.clear();
        assert_eq!(blank_email.validate(5), Err(ValidationError::MissingEmail));

        let mut malformed = submission(5);
        malformed.email = "mira.example.com".to_string();
        assert!(matches!(
            malformed.validate(5),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn rejects_wrong_answer_counts() {
        assert_eq!(
            submission(4).validate(5),
            Err(ValidationError::IncompleteAnswers {
                expected: 5,
                actual: 4
            })
        );
        assert!(submission(6).validate(5).is_err());
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let submission: QuizSubmission =
            serde_json::from_str(r#"{"name":"Mira"}"#).expect("deserializes");
        assert!(submission.email.is_empty());
        assert!(submission.answers.is_empty());
    }

    #[test]
    fn accepts_legacy_answer_field_names() {
        let submission: QuizSubmission = serde_json::from_str(
            r#"{"name":"Mira","email":"m@example.com","answers":[{"questionId":2,"answer":"Take the lead and organize everything"}]}"#,
        )
        .expect("deserializes");
        assert_eq!(
            submission.answers,
            vec![Answer::new(2, "Take the lead and organize everything")]
        );
    }
}
