// Dashboard service - Use case for building dashboard views
use crate::application::aggregation::{select_range, selected_len, share_of_total, top_n};
use crate::application::metrics_repository::MetricsRepository;
use crate::domain::dashboard::{
    AnalyticsView, ChartData, ChartKind, ChartSource, ChartSpec, ChartValues, Dashboard, TileData,
    TileSet, TrendsView, View,
};
use crate::domain::records::{ReportCatalog, UserDirectory};
use crate::domain::settings::Settings;
use crate::domain::time_range::TimeRange;
use crate::errors::DashboardError;
use crate::infrastructure::config::WidgetsConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn MetricsRepository>,
    widgets_config: WidgetsConfig,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn MetricsRepository>, widgets_config: WidgetsConfig) -> Self {
        Self {
            repository,
            widgets_config,
        }
    }

    /// Tiles and charts of a view; charts whose data cannot be loaded are left out.
    pub async fn dashboard(&self, view: View, range: TimeRange) -> Result<Dashboard, DashboardError> {
        let tiles = self.tiles(view.tile_set()).await?;
        let charts = self.fetch_charts(&view.charts(), range).await;
        Ok(Dashboard::new(view, range, tiles, charts))
    }

    pub async fn overview(&self, range: TimeRange) -> Result<Dashboard, DashboardError> {
        self.dashboard(View::Overview, range).await
    }

    pub async fn analytics(&self, range: TimeRange) -> Result<AnalyticsView, DashboardError> {
        let dashboard = self.dashboard(View::Analytics, range).await?;
        Ok(AnalyticsView {
            dashboard,
            funnel: self.repository.conversion_funnel().await?,
            engagement: self.repository.engagement_rows().await?,
        })
    }

    pub async fn trends(&self, range: TimeRange) -> Result<TrendsView, DashboardError> {
        let dashboard = self.dashboard(View::Trends, range).await?;
        Ok(TrendsView {
            dashboard,
            insights: self.repository.insights().await?,
            forecasts: self.repository.forecasts().await?,
        })
    }

    pub async fn reports(&self) -> Result<ReportCatalog, DashboardError> {
        Ok(self.repository.report_catalog().await?)
    }

    pub async fn users(&self) -> Result<UserDirectory, DashboardError> {
        Ok(self.repository.user_directory().await?)
    }

    pub async fn settings(&self) -> Result<Settings, DashboardError> {
        Ok(self.repository.settings().await?)
    }

    pub async fn tiles(&self, set: TileSet) -> Result<Vec<TileData>, DashboardError> {
        let tiles = match set {
            TileSet::Business => self.repository.stat_summary().await?.tiles(),
            TileSet::Engagement => self.repository.engagement_summary().await?.tiles(),
        };
        Ok(tiles)
    }

    /// Chart values for one widget at the requested range.
    pub async fn chart_values(
        &self,
        spec: &ChartSpec,
        range: TimeRange,
    ) -> anyhow::Result<ChartValues> {
        let values = match spec.source {
            ChartSource::Series(metric) => {
                let series = self.repository.time_series(metric).await?;
                ChartValues::TimeSeries {
                    points: select_range(&series, range, metric.aggregation()),
                }
            }
            ChartSource::Breakdown(id) => {
                let data = self.repository.breakdown(id).await?;
                match spec.kind {
                    ChartKind::Pie => ChartValues::Shares {
                        slices: share_of_total(&data),
                    },
                    ChartKind::HorizontalBar => ChartValues::Ranked {
                        items: top_n(&data, self.widgets_config.horizontal_bar_top_n),
                    },
                    _ => ChartValues::Ranked {
                        items: top_n(&data, self.widgets_config.bar_top_n),
                    },
                }
            }
        };
        Ok(values)
    }

    /// Point count a time-series chart will have at `range`; `None` for breakdowns.
    pub async fn expected_points(
        &self,
        spec: &ChartSpec,
        range: TimeRange,
    ) -> anyhow::Result<Option<usize>> {
        match spec.source {
            ChartSource::Series(metric) => {
                let series = self.repository.time_series(metric).await?;
                Ok(Some(selected_len(series.len(), range)))
            }
            ChartSource::Breakdown(_) => Ok(None),
        }
    }

    async fn fetch_charts(&self, specs: &[ChartSpec], range: TimeRange) -> Vec<ChartData> {
        let mut charts = Vec::new();

        for spec in specs {
            match self.chart_values(spec, range).await {
                Ok(values) if values.is_empty() => {
                    tracing::debug!(chart = spec.id, "Skipping chart without data");
                }
                Ok(values) => charts.push(ChartData::new(spec, values)),
                Err(e) => {
                    tracing::error!(chart = spec.id, error = %e, "Error fetching chart data");
                }
            }
        }

        charts
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::metrics::{Trend, TimeSeriesPoint};
    use crate::infrastructure::config::DatasetSettings;
    use crate::infrastructure::memory_repository::InMemoryRepository;
    use crate::infrastructure::mock_data::MockDataset;

    pub(crate) fn service() -> DashboardService {
        service_with_days(365)
    }

    pub(crate) fn service_with_days(days: usize) -> DashboardService {
        let settings = DatasetSettings {
            days,
            ..DatasetSettings::default()
        };
        let dataset = MockDataset::generate(&settings).unwrap();
        DashboardService::new(Arc::new(InMemoryRepository::new(dataset)), WidgetsConfig::default())
    }

    fn chart<'a>(dashboard: &'a Dashboard, id: &str) -> &'a ChartData {
        dashboard.charts.iter().find(|c| c.id == id).unwrap()
    }

    fn points(chart: &ChartData) -> &[TimeSeriesPoint] {
        match &chart.values {
            ChartValues::TimeSeries { points } => points,
            other => panic!("expected time series, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_overview_layout() {
        let dashboard = service().overview(TimeRange::Last7Days).await.unwrap();

        assert_eq!(dashboard.view, View::Overview);
        assert_eq!(dashboard.tiles.len(), 4);
        assert_eq!(dashboard.tiles[2].trend, Trend::Down);
        assert_eq!(dashboard.charts.len(), 5);
        assert_eq!(points(chart(&dashboard, "revenue_trend")).len(), 7);
    }

    #[tokio::test]
    async fn test_ranges_change_point_counts() {
        let service = service();
        for range in TimeRange::ALL {
            let dashboard = service.overview(range).await.unwrap();
            assert_eq!(points(chart(&dashboard, "user_growth")).len(), range.window_size());
        }
    }

    #[tokio::test]
    async fn test_bar_limits() {
        let dashboard = service().overview(TimeRange::Last30Days).await.unwrap();

        match &chart(&dashboard, "sales_by_category").values {
            ChartValues::Ranked { items } => {
                assert_eq!(items.len(), 8);
                assert_eq!(items[0].name, "Electronics");
                assert!(items.iter().all(|i| i.name != "Groceries"));
            }
            other => panic!("unexpected values {:?}", other),
        }
        match &chart(&dashboard, "top_products").values {
            ChartValues::Ranked { items } => assert_eq!(items.len(), 5),
            other => panic!("unexpected values {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_traffic_pie_shares_sum_to_hundred() {
        let dashboard = service().overview(TimeRange::Last7Days).await.unwrap();
        match &chart(&dashboard, "traffic_sources").values {
            ChartValues::Shares { slices } => {
                assert_eq!(slices.len(), 5);
                let total: f64 = slices.iter().map(|s| s.share).sum();
                assert!((total - 100.0).abs() < 1e-9);
            }
            other => panic!("unexpected values {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_analytics_view() {
        let view = service().analytics(TimeRange::Last90Days).await.unwrap();
        assert_eq!(view.dashboard.tiles[0].id, "page_views");
        assert_eq!(view.dashboard.charts.len(), 3);
        assert_eq!(view.funnel.len(), 5);
        assert_eq!(view.engagement.len(), 5);
    }

    #[tokio::test]
    async fn test_trends_view_serializes_flat() {
        let view = service().trends(TimeRange::LastYear).await.unwrap();
        assert_eq!(view.insights.len(), 4);
        assert_eq!(view.dashboard.charts.len(), 3);
        assert_eq!(points(chart(&view.dashboard, "order_volume_trends")).len(), 13);
        assert_eq!(view.forecasts.len(), 4);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["view"], "trends");
        assert_eq!(json["range"], "1y");
        assert_eq!(json["charts"][0]["values"]["points"].as_array().unwrap().len(), 13);
    }

    #[tokio::test]
    async fn test_short_dataset_passes_through() {
        let service = service_with_days(120);
        let dashboard = service.overview(TimeRange::LastYear).await.unwrap();
        assert_eq!(points(chart(&dashboard, "revenue_trend")).len(), 120);

        let charts = View::Overview.charts();
        let revenue = &charts[0];
        assert_eq!(service.expected_points(revenue, TimeRange::LastYear).await.unwrap(), Some(120));
        assert_eq!(service.expected_points(revenue, TimeRange::Last90Days).await.unwrap(), Some(13));
        let pie = &charts[4];
        assert_eq!(service.expected_points(pie, TimeRange::LastYear).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_static_documents() {
        let service = service();
        assert_eq!(service.reports().await.unwrap().report_types.len(), 4);
        assert_eq!(service.users().await.unwrap().summary.total, 5);
        assert_eq!(service.settings().await.unwrap().profile.name, "John Doe");
    }
}
