// HTTP request handlers
use crate::domain::dashboard::View;
use crate::domain::notification::Notification;
use crate::domain::time_range::TimeRange;
use crate::errors::DashboardError;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub range: Option<String>,
}

impl RangeQuery {
    /// Requested range, 7d when absent
    pub fn time_range(&self) -> Result<TimeRange, DashboardError> {
        match self.range.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(TimeRange::default()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationUpdate {
    pub notification: Notification,
    pub unread_count: usize,
}

#[derive(Debug, Serialize)]
pub struct MarkAllRead {
    pub changed: usize,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full payload of a chart view at the requested range
pub async fn get_view(
    Path(view): Path<String>,
    Query(query): Query<RangeQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let view: View = view.parse()?;
    let range = query.time_range()?;
    let compress = accepts_brotli(&headers);
    let service = &state.dashboard_service;

    tracing::debug!(%view, %range, compress, "Building view");

    match view {
        View::Overview => json_response(&service.overview(range).await?, compress).await,
        View::Analytics => json_response(&service.analytics(range).await?, compress).await,
        View::Trends => json_response(&service.trends(range).await?, compress).await,
    }
}

/// Stream a chart view progressively
pub async fn stream_view(
    Path(view): Path<String>,
    Query(query): Query<RangeQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let view: View = view.parse()?;
    let range = query.time_range()?;
    let compress = accepts_brotli(&headers);

    let rx = state.streaming_service.stream_dashboard(view, range);
    Ok(stream_from_receiver(rx, compress).into_response())
}

pub async fn get_reports(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let reports = state.dashboard_service.reports().await?;
    json_response(&reports, accepts_brotli(&headers)).await
}

pub async fn get_users(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let users = state.dashboard_service.users().await?;
    json_response(&users, accepts_brotli(&headers)).await
}

pub async fn get_settings(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let settings = state.dashboard_service.settings().await?;
    json_response(&settings, accepts_brotli(&headers)).await
}

pub async fn list_notifications(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let list = state.notification_service.list().await;
    json_response(&list, accepts_brotli(&headers)).await
}

pub async fn mark_notification_read(
    Path(id): Path<u32>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let service = &state.notification_service;
    let notification = service.mark_read(id).await?;
    let update = NotificationUpdate {
        notification,
        unread_count: service.unread_count().await,
    };
    json_response(&update, false).await
}

pub async fn mark_all_notifications_read(
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let changed = state.notification_service.mark_all_read().await;
    json_response(&MarkAllRead { changed }, false).await
}

pub async fn delete_notification(
    Path(id): Path<u32>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let service = &state.notification_service;
    let notification = service.delete(id).await?;
    let update = NotificationUpdate {
        notification,
        unread_count: service.unread_count().await,
    };
    json_response(&update, false).await
}
