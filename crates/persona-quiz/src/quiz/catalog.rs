use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

/// Question presented to every respondent, with its weighted options in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, label: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.label == label)
    }

    fn heaviest_weight(&self) -> u32 {
        self.options
            .iter()
            .map(|option| option.weight)
            .max()
            .unwrap_or(0)
    }
}

/// Selectable answer contributing `weight` points toward `trait_tag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub label: &'static str,
    pub trait_tag: &'static str,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("question id {0} appears more than once")]
    DuplicateQuestion(u32),
    #[error("question {question_id} has no options")]
    NoOptions { question_id: u32 },
    #[error("question {question_id} repeats option label '{label}'")]
    DuplicateLabel { question_id: u32, label: String },
    #[error("option '{label}' on question {question_id} must carry a positive weight")]
    ZeroWeight { question_id: u32, label: String },
}

/// Ordered, read-only question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::new();
        for question in &questions {
            if !seen_ids.insert(question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id));
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions {
                    question_id: question.id,
                });
            }

            let mut seen_labels = HashSet::new();
            for option in &question.options {
                if !seen_labels.insert(option.label) {
                    return Err(CatalogError::DuplicateLabel {
                        question_id: question.id,
                        label: option.label.to_string(),
                    });
                }
                if option.weight == 0 {
                    return Err(CatalogError::ZeroWeight {
                        question_id: question.id,
                        label: option.label.to_string(),
                    });
                }
            }
        }

        Ok(Self { questions })
    }

    /// The built-in five question catalog, loaded once per process.
    pub fn standard() -> &'static QuestionCatalog {
        static STANDARD: OnceLock<QuestionCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| Self {
            questions: standard_questions(),
        })
    }

    pub fn get_question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn get_option(&self, question_id: u32, label: &str) -> Option<&QuestionOption> {
        self.get_question(question_id)
            .and_then(|question| question.option(label))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Best attainable total: the heaviest option of every question.
    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(Question::heaviest_weight).sum()
    }
}

fn option(label: &'static str, trait_tag: &'static str, weight: u32) -> QuestionOption {
    QuestionOption {
        label,
        trait_tag,
        weight,
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            prompt: "What's your preferred way to spend a weekend?",
            options: vec![
                option("Reading a book or learning something new", "introvert", 2),
                option("Socializing with friends and family", "extrovert", 2),
                option("Outdoor activities like hiking or sports", "active", 2),
                option("Creative pursuits like art, music, or writing", "creative", 2),
            ],
        },
        Question {
            id: 2,
            prompt: "In a team project, you usually:",
            options: vec![
                option("Take the lead and organize everything", "leader", 3),
                option("Contribute ideas and collaborate equally", "collaborator", 2),
                option("Focus on the detailed work behind the scenes", "supporter", 2),
                option("Bring creative solutions to problems", "innovator", 3),
            ],
        },
        Question {
            id: 3,
            prompt: "Which skill would you most like to develop?",
            options: vec![
                option("Technical programming skills", "technical", 3),
                option("Leadership and management abilities", "leadership", 3),
                option("Creative design and artistic skills", "creative", 2),
                option("Communication and interpersonal skills", "social", 2),
            ],
        },
        Question {
            id: 4,
            prompt: "Your ideal work environment is:",
            options: vec![
                option("Quiet space where I can focus deeply", "focused", 2),
                option(
                    "Collaborative open office with team interaction",
                    "collaborative",
                    2,
                ),
                option("Flexible remote work with autonomy", "autonomous", 3),
                option("Dynamic startup environment with variety", "dynamic", 3),
            ],
        },
        Question {
            id: 5,
            prompt: "When facing a complex problem, you:",
            options: vec![
                option("Break it down systematically step by step", "analytical", 3),
                option("Brainstorm creative solutions first", "creative", 2),
                option("Research what others have done before", "research", 2),
                option(
                    "Discuss it with others to get different perspectives",
                    "collaborative",
                    2,
                ),
            ],
        },
    ]
}
