use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredNotifier, InMemoryResultRepository};
use crate::routes::with_quiz_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use persona_quiz::config::AppConfig;
use persona_quiz::error::AppError;
use persona_quiz::quiz::submission::QuizSubmissionService;
use persona_quiz::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let notifier = ConfiguredNotifier::from_config(&config.mail, config.environment);
    info!(notifier = notifier.describe(), "quiz summary delivery configured");

    let repository = Arc::new(InMemoryResultRepository::default());
    let service = Arc::new(QuizSubmissionService::new(repository, Arc::new(notifier)));

    let app = with_quiz_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "personality quiz service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
