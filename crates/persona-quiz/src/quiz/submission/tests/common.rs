use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::quiz::domain::{Answer, ResultId};
use crate::quiz::notification::{
    NotificationError, NotificationPayload, NotificationReceipt, ResultNotifier,
};
use crate::quiz::submission::repository::{QuizResultRecord, RepositoryError, ResultRepository};
use crate::quiz::submission::{quiz_router, QuizSubmission, QuizSubmissionService};

pub(super) fn canonical_answers() -> Vec<Answer> {
    vec![
        Answer::new(1, "Reading a book or learning something new"),
        Answer::new(2, "Take the lead and organize everything"),
        Answer::new(3, "Leadership and management abilities"),
        Answer::new(4, "Flexible remote work with autonomy"),
        Answer::new(5, "Break it down systematically step by step"),
    ]
}

pub(super) fn submission() -> QuizSubmission {
    QuizSubmission {
        name: "Jordan Reyes".to_string(),
        email: "Jordan@Example.com".to_string(),
        answers: canonical_answers(),
    }
}

pub(super) fn creative_submission() -> QuizSubmission {
    QuizSubmission {
        name: "Ari".to_string(),
        email: "ari@example.com".to_string(),
        answers: vec![
            Answer::new(1, "Creative pursuits like art, music, or writing"),
            Answer::new(2, "Contribute ideas and collaborate equally"),
            Answer::new(3, "Creative design and artistic skills"),
            Answer::new(4, "Quiet space where I can focus deeply"),
            Answer::new(5, "Brainstorm creative solutions first"),
        ],
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<BTreeMap<ResultId, QuizResultRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ResultRepository for MemoryRepository {
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
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        records.truncate(limit);
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    sent: Arc<Mutex<Vec<NotificationPayload>>>,
}

impl MemoryNotifier {
    pub(super) fn sent(&self) -> Vec<NotificationPayload> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

impl ResultNotifier for MemoryNotifier {
    fn notify(
        &self,
        payload: &NotificationPayload,
    ) -> Result<NotificationReceipt, NotificationError> {
        self.sent
            .lock()
            .expect("notifier mutex poisoned")
            .push(payload.clone());
        Ok(NotificationReceipt {
            message_id: Some(format!("msg-{}", payload.email)),
            simulated: false,
        })
    }
}

pub(super) struct FailingNotifier;

impl ResultNotifier for FailingNotifier {
    fn notify(
        &self,
        _payload: &NotificationPayload,
    ) -> Result<NotificationReceipt, NotificationError> {
        Err(NotificationError::Transport("mail API offline".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl ResultRepository for ConflictRepository {
    fn insert(&self, _record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ResultId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<QuizResultRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ResultRepository for UnavailableRepository {
    fn insert(&self, _record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ResultId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<QuizResultRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    QuizSubmissionService<MemoryRepository, MemoryNotifier>,
    MemoryRepository,
    MemoryNotifier,
) {
    let repository = MemoryRepository::default();
    let notifier = MemoryNotifier::default();
    let service =
        QuizSubmissionService::new(Arc::new(repository.clone()), Arc::new(notifier.clone()));
    (service, repository, notifier)
}

pub(super) fn router_with_service<R, N>(service: QuizSubmissionService<R, N>) -> axum::Router
where
    R: ResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    quiz_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
