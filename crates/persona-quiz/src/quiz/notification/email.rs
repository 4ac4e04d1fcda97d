use std::fmt::Write as _;

use super::{NotificationError, NotificationPayload};

/// Rendered message ready for a mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to_address: String,
    pub to_name: String,
    pub subject: String,
    pub html_body: String,
}

const STYLE: &str = "body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; }
.header { background: linear-gradient(90deg, #3b82f6, #2563eb); color: white; padding: 20px; text-align: center; }
.content { padding: 20px; }
.score-section { background: #f8fafc; padding: 15px; border-radius: 8px; margin: 20px 0; }
.recommendations { background: #eff6ff; padding: 15px; border-radius: 8px; margin: 20px 0; }
.recommendation-item { margin: 10px 0; padding: 10px; background: white; border-radius: 5px; }
.footer { text-align: center; padding: 20px; font-size: 0.9em; color: #666; }";

pub fn render_email(payload: &NotificationPayload) -> Result<EmailMessage, NotificationError> {
    let email = payload.email.trim();
    let name = payload.name.trim();
    if email.is_empty() {
        return Err(NotificationError::MissingField("email"));
    }
    if name.is_empty() {
        return Err(NotificationError::MissingField("name"));
    }

    let recommendation = &payload.recommendation;
    let subject = format!("Your Personality Quiz Results - {}", recommendation.title());

    let mut suggestions = String::new();
    for (index, suggestion) in recommendation.profile.suggestions.iter().enumerate() {
        writeln!(
            &mut suggestions,
            "<div class=\"recommendation-item\"><strong>{}.</strong> {}</div>",
            index + 1,
            escape_html(suggestion)
        )
        .expect("write suggestion");
    }

    let mut html_body = String::new();
    write!(
        &mut html_body,
        "<!DOCTYPE html>\n<html>\n<head>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n\
<div class=\"header\"><h1>Your Personality Quiz Results</h1><p>Personalized insights just for you!</p></div>\n\
<div class=\"content\">\n<h2>Hello {name}!</h2>\n\
<p>Thank you for taking our personality quiz. Here are your detailed results:</p>\n\
<div class=\"score-section\">\n<h3>Your Results</h3>\n\
<p><strong>Personality Type:</strong> {title}</p>\n\
<p><strong>Score:</strong> {score}/{max} ({level} Level)</p>\n\
<p><strong>Description:</strong> {description}</p>\n</div>\n\
<div class=\"recommendations\">\n<h3>Personalized Recommendations</h3>\n{suggestions}</div>\n\
<p>We hope these insights help you on your personal and professional journey!</p>\n</div>\n\
<div class=\"footer\"><p>This email was sent from the Personality Quiz App</p>\
<p>If you have any questions, feel free to reach out to us.</p></div>\n</body>\n</html>\n",
        name = escape_html(name),
        title = escape_html(recommendation.title()),
        score = payload.total_score,
        max = payload.max_score,
        level = recommendation.level.label(),
        description = escape_html(&recommendation.profile.description),
    )
    .expect("write html body");

    Ok(EmailMessage {
        to_address: email.to_string(),
        to_name: name.to_string(),
        subject,
        html_body,
    })
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
