//! Outbound result summaries.
//!
//! Delivery happens after a result is stored and can never invalidate it; callers record the
//! outcome as a [`NotificationStatus`] instead of failing the submission.

mod email;
mod zeptomail;

pub use email::{render_email, EmailMessage};
pub use zeptomail::ZeptoMailNotifier;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::QuestionCatalog;
use super::domain::QuizResult;
use super::scoring::Recommendation;

/// Everything needed to render a results message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "personalityType")]
    pub dominant_trait: String,
    pub recommendation: Recommendation,
    #[serde(alias = "totalScore")]
    pub total_score: u32,
    #[serde(default = "standard_max_score")]
    pub max_score: u32,
}

fn standard_max_score() -> u32 {
    QuestionCatalog::standard().max_score()
}

impl NotificationPayload {
    pub fn from_result(result: &QuizResult, max_score: u32) -> Self {
        Self {
            email: result.respondent_email.clone(),
            name: result.respondent_name.clone(),
            dominant_trait: result.dominant_trait.clone(),
            recommendation: result.recommendation.clone(),
            total_score: result.total_score,
            max_score,
        }
    }
}

/// Outbound channel for result summaries (mail API, logs, test doubles).
pub trait ResultNotifier: Send + Sync {
    fn notify(&self, payload: &NotificationPayload) -> Result<NotificationReceipt, NotificationError>;
}

/// Acknowledgement returned by a notifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    pub simulated: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification payload is missing {0}")]
    MissingField(&'static str),
    #[error("mail transport unavailable: {0}")]
    Transport(String),
    #[error("mail API rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivery outcome reported alongside a stored result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NotificationStatus {
    Delivered {
        #[serde(skip_serializing_if = "Option::is_none")]
        message_id: Option<String>,
    },
    Simulated,
    Failed {
        reason: String,
    },
}

impl From<NotificationReceipt> for NotificationStatus {
    fn from(receipt: NotificationReceipt) -> Self {
        if receipt.simulated {
            NotificationStatus::Simulated
        } else {
            NotificationStatus::Delivered {
                message_id: receipt.message_id,
            }
        }
    }
}

/// Writes the rendered subject to the log instead of sending mail.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl ResultNotifier for LogNotifier {
    fn notify(&self, payload: &NotificationPayload) -> Result<NotificationReceipt, NotificationError> {
        let message = render_email(payload)?;
        info!(
            recipient = %message.to_address,
            subject = %message.subject,
            "mail delivery disabled; logged quiz summary instead"
        );
        Ok(NotificationReceipt {
            message_id: None,
            simulated: true,
        })
    }
}
