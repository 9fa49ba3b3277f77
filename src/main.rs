// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod errors;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::metrics_repository::MetricsRepository;
use crate::application::notification_service::NotificationService;
use crate::application::streaming_service::StreamingDashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::memory_repository::InMemoryRepository;
use crate::infrastructure::mock_data::MockDataset;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    delete_notification, get_reports, get_settings, get_users, get_view, health_check,
    list_notifications, mark_all_notifications_read, mark_notification_read, stream_view,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_app_config()?;

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Build the mock dataset once (infrastructure layer)
    let dataset = MockDataset::generate(&config.dataset)?;
    let repository = Arc::new(InMemoryRepository::new(dataset));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository.clone(), config.widgets.clone());
    let streaming_service = StreamingDashboardService::new(dashboard_service.clone());
    let notification_service = NotificationService::new(repository.notifications().await?);

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        streaming_service,
        notification_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/views/:view", get(get_view))
        .route("/views/:view/stream", get(stream_view))
        .route("/reports", get(get_reports))
        .route("/users", get(get_users))
        .route("/settings", get(get_settings))
        .route("/notifications", get(list_notifications))
        .route("/notifications/read-all", post(mark_all_notifications_read))
        .route("/notifications/:id/read", post(mark_notification_read))
        .route("/notifications/:id", delete(delete_notification))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid server.bind_addr '{}'", config.server.bind_addr))?;
    tracing::info!(%addr, days = config.dataset.days, "Starting dashboard service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
