use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{
    render_email, EmailMessage, NotificationError, NotificationPayload, NotificationReceipt,
    ResultNotifier,
};
use crate::config::MailConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Mail API notifier posting rendered summaries as JSON.
///
/// Uses the blocking client, so call it from a blocking context (e.g. `spawn_blocking`).
#[derive(Debug, Clone)]
pub struct ZeptoMailNotifier {
    endpoint: String,
    api_key: String,
    from_address: String,
    from_name: String,
    simulate_failures: bool,
}

impl ZeptoMailNotifier {
    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &MailConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            endpoint: config.endpoint.clone(),
            api_key,
            from_address: config.from_address.clone(),
            from_name: config.from_name.clone(),
            simulate_failures: false,
        })
    }

    /// Report transport failures as simulated deliveries; meant for local development.
    pub fn simulate_failures(mut self, enabled: bool) -> Self {
        self.simulate_failures = enabled;
        self
    }

    fn request_body<'a>(&'a self, message: &'a EmailMessage) -> MailRequest<'a> {
        MailRequest {
            from: MailAddress {
                address: &self.from_address,
                name: &self.from_name,
            },
            to: vec![MailRecipient {
                email_address: MailAddress {
                    address: &message.to_address,
                    name: &message.to_name,
                },
            }],
            subject: &message.subject,
            htmlbody: &message.html_body,
        }
    }

    fn send(&self, payload: &NotificationPayload) -> Result<NotificationReceipt, NotificationError> {
        let message = render_email(payload)?;
        let body = self.request_body(&message);

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| NotificationError::Transport(err.to_string()))?;

        let response = client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Zoho-enczapikey {}", self.api_key),
            )
            .json(&body)
            .send()
            .map_err(|err| NotificationError::Transport(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|err| NotificationError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        let message_id = parse_message_id(&text);
        info!(recipient = %message.to_address, message_id = ?message_id, "quiz summary sent");

        Ok(NotificationReceipt {
            message_id,
            simulated: false,
        })
    }
}

impl ResultNotifier for ZeptoMailNotifier {
    fn notify(&self, payload: &NotificationPayload) -> Result<NotificationReceipt, NotificationError> {
        match self.send(payload) {
            Ok(receipt) => Ok(receipt),
            Err(NotificationError::MissingField(field)) => {
                Err(NotificationError::MissingField(field))
            }
            Err(err) if self.simulate_failures => {
                warn!(error = %err, "mail delivery failed; simulating success in development");
                Ok(NotificationReceipt {
                    message_id: None,
                    simulated: true,
                })
            }
            Err(err) => Err(err),
        }
    }
}

#[derive(Debug, Serialize)]
struct MailRequest<'a> {
    from: MailAddress<'a>,
    to: Vec<MailRecipient<'a>>,
    subject: &'a str,
    htmlbody: &'a str,
}

#[derive(Debug, Serialize)]
struct MailAddress<'a> {
    address: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct MailRecipient<'a> {
    email_address: MailAddress<'a>,
}

#[derive(Debug, Deserialize)]
struct MailResponse {
    #[serde(default)]
    data: Vec<MailResponseEntry>,
}

#[derive(Debug, Deserialize)]
struct MailResponseEntry {
    message_id: Option<String>,
}

fn parse_message_id(body: &str) -> Option<String> {
    serde_json::from_str::<MailResponse>(body)
        .ok()?
        .data
        .into_iter()
        .find_map(|entry| entry.message_id)
}
