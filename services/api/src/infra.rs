use metrics_exporter_prometheus::PrometheusHandle;
use persona_quiz::config::{AppEnvironment, MailConfig};
use persona_quiz::quiz::notification::{
    LogNotifier, NotificationError, NotificationPayload, NotificationReceipt, ResultNotifier,
    ZeptoMailNotifier,
};
use persona_quiz::quiz::submission::{QuizResultRecord, RepositoryError, ResultRepository};
use persona_quiz::quiz::{Answer, ResultId};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryResultRepository {
    records: Arc<Mutex<HashMap<ResultId, QuizResultRecord>>>,
}

impl ResultRepository for InMemoryResultRepository {
    fn insert(&self, record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ResultId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<QuizResultRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        records.truncate(limit);
        Ok(records)
    }
}

/// Mail API delivery when a key is configured, log-only otherwise.
pub(crate) enum ConfiguredNotifier {
    Mail(ZeptoMailNotifier),
    Log(LogNotifier),
}

impl ConfiguredNotifier {
    pub(crate) fn from_config(mail: &MailConfig, environment: AppEnvironment) -> Self {
        match ZeptoMailNotifier::from_config(mail) {
            Some(notifier) => {
                Self::Mail(notifier.simulate_failures(environment.is_development()))
            }
            None => {
                if environment == AppEnvironment::Production {
                    warn!("ZEPTOMAIL_API_KEY is not set; quiz summaries will only be logged");
                }
                Self::Log(LogNotifier)
            }
        }
    }

    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Self::Mail(_) => "mail api",
            Self::Log(_) => "log only",
        }
    }
}

impl ResultNotifier for ConfiguredNotifier {
    fn notify(
        &self,
        payload: &NotificationPayload,
    ) -> Result<NotificationReceipt, NotificationError> {
        match self {
            Self::Mail(notifier) => notifier.notify(payload),
            Self::Log(notifier) => notifier.notify(payload),
        }
    }
}

/// Parses `ID=LABEL` command line answers.
pub(crate) fn parse_answer(raw: &str) -> Result<Answer, String> {
    let (id, label) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION_ID=LABEL, got '{raw}'"))?;
    let question_id = id
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid question id '{}' ({err})", id.trim()))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("answer for question {question_id} is empty"));
    }
    Ok(Answer::new(question_id, label))
}
