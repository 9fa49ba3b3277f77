// In-memory repository over the start-up mock dataset
use crate::application::metrics_repository::MetricsRepository;
use crate::domain::metrics::{
    BreakdownId, EngagementSummary, MetricId, NamedValue, StatSummary, TimeSeriesPoint,
};
use crate::domain::notification::Notification;
use crate::domain::records::{
    EngagementRow, Forecast, FunnelStage, Insight, ReportCatalog, UserDirectory,
};
use crate::domain::settings::Settings;
use crate::infrastructure::mock_data::MockDataset;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    dataset: Arc<MockDataset>,
}

impl InMemoryRepository {
    pub fn new(dataset: MockDataset) -> Self {
        tracing::debug!(
            days = dataset.revenue.len(),
            categories = dataset.categories.len(),
            products = dataset.products.len(),
            "Loaded mock dataset"
        );
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

#[async_trait]
impl MetricsRepository for InMemoryRepository {
    async fn time_series(&self, metric: MetricId) -> Result<Vec<TimeSeriesPoint>> {
        let series = match metric {
            MetricId::Revenue => &self.dataset.revenue,
            MetricId::Users => &self.dataset.users,
            MetricId::Orders => &self.dataset.orders,
        };
        Ok(series.clone())
    }

    async fn breakdown(&self, id: BreakdownId) -> Result<Vec<NamedValue>> {
        let data = match id {
            BreakdownId::SalesByCategory => &self.dataset.categories,
            BreakdownId::TopProducts => &self.dataset.products,
            BreakdownId::TrafficSources => &self.dataset.traffic,
        };
        Ok(data.clone())
    }

    async fn stat_summary(&self) -> Result<StatSummary> {
        Ok(self.dataset.stats.clone())
    }

    async fn engagement_summary(&self) -> Result<EngagementSummary> {
        Ok(self.dataset.engagement.clone())
    }

    async fn conversion_funnel(&self) -> Result<Vec<FunnelStage>> {
        Ok(self.dataset.funnel.clone())
    }

    async fn engagement_rows(&self) -> Result<Vec<EngagementRow>> {
        Ok(self.dataset.engagement_rows.clone())
    }

    async fn insights(&self) -> Result<Vec<Insight>> {
        Ok(self.dataset.insights.clone())
    }

    async fn forecasts(&self) -> Result<Vec<Forecast>> {
        Ok(self.dataset.forecasts.clone())
    }

    async fn report_catalog(&self) -> Result<ReportCatalog> {
        Ok(self.dataset.reports.clone())
    }

    async fn user_directory(&self) -> Result<UserDirectory> {
        Ok(self.dataset.directory.clone())
    }

    async fn notifications(&self) -> Result<Vec<Notification>> {
        Ok(self.dataset.notifications.clone())
    }

    async fn settings(&self) -> Result<Settings> {
        Ok(self.dataset.settings.clone())
    }
}
