// Repository trait for dashboard data access
use crate::domain::metrics::{
    BreakdownId, EngagementSummary, MetricId, NamedValue, StatSummary, TimeSeriesPoint,
};
use crate::domain::notification::Notification;
use crate::domain::records::{
    EngagementRow, Forecast, FunnelStage, Insight, ReportCatalog, UserDirectory,
};
use crate::domain::settings::Settings;
use async_trait::async_trait;

#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// Daily series for a metric, ascending by date
    async fn time_series(&self, metric: MetricId) -> anyhow::Result<Vec<TimeSeriesPoint>>;

    /// Unordered category/product/traffic values
    async fn breakdown(&self, id: BreakdownId) -> anyhow::Result<Vec<NamedValue>>;

    async fn stat_summary(&self) -> anyhow::Result<StatSummary>;

    async fn engagement_summary(&self) -> anyhow::Result<EngagementSummary>;

    async fn conversion_funnel(&self) -> anyhow::Result<Vec<FunnelStage>>;

    async fn engagement_rows(&self) -> anyhow::Result<Vec<EngagementRow>>;

    async fn insights(&self) -> anyhow::Result<Vec<Insight>>;

    async fn forecasts(&self) -> anyhow::Result<Vec<Forecast>>;

    async fn report_catalog(&self) -> anyhow::Result<ReportCatalog>;

    async fn user_directory(&self) -> anyhow::Result<UserDirectory>;

    /// Initial notification list; the notification service owns it afterwards
    async fn notifications(&self) -> anyhow::Result<Vec<Notification>>;

    async fn settings(&self) -> anyhow::Result<Settings>;
}
