// Dashboard domain model
use super::metrics::{
    BreakdownId, EngagementSummary, MetricId, NamedValue, PieSlice, StatSummary, TimeSeriesPoint,
    Trend,
};
use super::records::{EngagementRow, Forecast, FunnelStage, Insight};
use super::time_range::TimeRange;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileData {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub value: f64,
    pub precision: i32,
    pub change: f64,
    pub trend: Trend,
}

impl TileData {
    pub fn new(id: &str, title: &str, unit: &str, value: f64, precision: i32, change: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: unit.to_string(),
            value,
            precision,
            change,
            trend: Trend::from_change(change),
        }
    }
}

impl StatSummary {
    pub fn tiles(&self) -> Vec<TileData> {
        vec![
            TileData::new("revenue", "Revenue", "$", self.revenue, 0, self.revenue_change),
            TileData::new("users", "Users", "", self.users, 0, self.users_change),
            TileData::new(
                "conversion_rate",
                "Conversion Rate",
                "%",
                self.conversion_rate,
                1,
                self.conversion_rate_change,
            ),
            TileData::new("orders", "Orders", "", self.orders, 0, self.orders_change),
        ]
    }
}

impl EngagementSummary {
    pub fn tiles(&self) -> Vec<TileData> {
        vec![
            TileData::new("page_views", "Page Views", "", self.page_views, 0, self.page_views_change),
            TileData::new(
                "click_through",
                "Click-through Rate",
                "%",
                self.click_through,
                1,
                self.click_through_change,
            ),
            TileData::new(
                "avg_session_time",
                "Avg. Session Time",
                "m",
                self.avg_session_minutes,
                1,
                self.avg_session_minutes_change,
            ),
            TileData::new("bounce_rate", "Bounce Rate", "%", self.bounce_rate, 1, self.bounce_rate_change),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Area,
    Line,
    Bar,
    HorizontalBar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartValues {
    TimeSeries { points: Vec<TimeSeriesPoint> },
    Ranked { items: Vec<NamedValue> },
    Shares { slices: Vec<PieSlice> },
}

impl ChartValues {
    pub fn is_empty(&self) -> bool {
        match self {
            ChartValues::TimeSeries { points } => points.is_empty(),
            ChartValues::Ranked { items } => items.is_empty(),
            ChartValues::Shares { slices } => slices.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub unit: Option<String>,
    pub values: ChartValues,
}

impl ChartData {
    pub fn new(spec: &ChartSpec, values: ChartValues) -> Self {
        Self {
            id: spec.id.to_string(),
            title: spec.title.to_string(),
            kind: spec.kind,
            unit: spec.unit.map(str::to_string),
            values,
        }
    }
}

/// Where a chart takes its data from.
///
/// Charts name their dataset explicitly; the display title never selects data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSource {
    Series(MetricId),
    Breakdown(BreakdownId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub unit: Option<&'static str>,
    pub source: ChartSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSet {
    Business,
    Engagement,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown view '{0}', expected one of overview, analytics, trends")]
pub struct ParseViewError(pub String);

/// Views that carry range-selected charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Overview,
    Analytics,
    Trends,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Analytics => "analytics",
            View::Trends => "trends",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Dashboard Overview",
            View::Analytics => "Analytics",
            View::Trends => "Trends",
        }
    }

    pub fn heading(&self, range: TimeRange) -> String {
        format!("{} ({})", self.title(), range.label())
    }

    pub fn tile_set(&self) -> TileSet {
        match self {
            View::Analytics => TileSet::Engagement,
            View::Overview | View::Trends => TileSet::Business,
        }
    }

    pub fn charts(&self) -> Vec<ChartSpec> {
        match self {
            View::Overview => vec![
                ChartSpec {
                    id: "revenue_trend",
                    title: "Revenue Trend",
                    kind: ChartKind::Area,
                    unit: Some("$"),
                    source: ChartSource::Series(MetricId::Revenue),
                },
                ChartSpec {
                    id: "user_growth",
                    title: "User Growth",
                    kind: ChartKind::Line,
                    unit: None,
                    source: ChartSource::Series(MetricId::Users),
                },
                ChartSpec {
                    id: "sales_by_category",
                    title: "Sales by Category",
                    kind: ChartKind::Bar,
                    unit: Some("$"),
                    source: ChartSource::Breakdown(BreakdownId::SalesByCategory),
                },
                ChartSpec {
                    id: "top_products",
                    title: "Top Products",
                    kind: ChartKind::HorizontalBar,
                    unit: Some("$"),
                    source: ChartSource::Breakdown(BreakdownId::TopProducts),
                },
                ChartSpec {
                    id: "traffic_sources",
                    title: "Traffic Sources",
                    kind: ChartKind::Pie,
                    unit: None,
                    source: ChartSource::Breakdown(BreakdownId::TrafficSources),
                },
            ],
            View::Analytics => vec![
                ChartSpec {
                    id: "revenue_analytics",
                    title: "Revenue Analytics",
                    kind: ChartKind::Area,
                    unit: Some("$"),
                    source: ChartSource::Series(MetricId::Revenue),
                },
                ChartSpec {
                    id: "user_engagement_trends",
                    title: "User Engagement Trends",
                    kind: ChartKind::Line,
                    unit: None,
                    source: ChartSource::Series(MetricId::Users),
                },
                ChartSpec {
                    id: "performance_by_category",
                    title: "Performance by Category",
                    kind: ChartKind::Bar,
                    unit: Some("$"),
                    source: ChartSource::Breakdown(BreakdownId::SalesByCategory),
                },
            ],
            View::Trends => vec![
                ChartSpec {
                    id: "revenue_trends",
                    title: "Revenue Trends",
                    kind: ChartKind::Area,
                    unit: Some("$"),
                    source: ChartSource::Series(MetricId::Revenue),
                },
                ChartSpec {
                    id: "user_growth_trends",
                    title: "User Growth Trends",
                    kind: ChartKind::Line,
                    unit: None,
                    source: ChartSource::Series(MetricId::Users),
                },
                ChartSpec {
                    id: "order_volume_trends",
                    title: "Order Volume Trends",
                    kind: ChartKind::Bar,
                    unit: None,
                    source: ChartSource::Series(MetricId::Orders),
                },
            ],
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(View::Overview),
            "analytics" => Ok(View::Analytics),
            "trends" => Ok(View::Trends),
            other => Err(ParseViewError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub view: View,
    pub title: String,
    pub range: TimeRange,
    pub tiles: Vec<TileData>,
    pub charts: Vec<ChartData>,
}

impl Dashboard {
    pub fn new(view: View, range: TimeRange, tiles: Vec<TileData>, charts: Vec<ChartData>) -> Self {
        Self {
            view,
            title: view.heading(range),
            range,
            tiles,
            charts,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsView {
    #[serde(flatten)]
    pub dashboard: Dashboard,
    pub funnel: Vec<FunnelStage>,
    pub engagement: Vec<EngagementRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendsView {
    #[serde(flatten)]
    pub dashboard: Dashboard,
    pub insights: Vec<Insight>,
    pub forecasts: Vec<Forecast>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_parse() {
        assert_eq!("trends".parse::<View>(), Ok(View::Trends));
        assert_eq!(
            "settings".parse::<View>(),
            Err(ParseViewError("settings".to_string()))
        );
    }

    #[test]
    fn test_overview_layout_selects_data_by_id() {
        let charts = View::Overview.charts();
        assert_eq!(charts.len(), 5);

        let category = charts.iter().find(|c| c.id == "sales_by_category").unwrap();
        assert_eq!(category.source, ChartSource::Breakdown(BreakdownId::SalesByCategory));

        let products = charts.iter().find(|c| c.id == "top_products").unwrap();
        assert_eq!(products.source, ChartSource::Breakdown(BreakdownId::TopProducts));
        assert_eq!(products.kind, ChartKind::HorizontalBar);
    }

    #[test]
    fn test_trends_layout_reads_every_series() {
        let sources: Vec<ChartSource> = View::Trends.charts().iter().map(|c| c.source).collect();
        for metric in [MetricId::Revenue, MetricId::Users, MetricId::Orders] {
            assert!(sources.contains(&ChartSource::Series(metric)), "{:?} not charted", metric);
        }
    }

    #[test]
    fn test_chart_ids_unique_per_view() {
        for view in [View::Overview, View::Analytics, View::Trends] {
            let charts = view.charts();
            let mut ids: Vec<&str> = charts.iter().map(|c| c.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), charts.len(), "duplicate chart id in {}", view);
        }
    }

    #[test]
    fn test_stat_tiles_trend() {
        let stats = StatSummary {
            revenue: 128_745.0,
            revenue_change: 12.3,
            users: 12_583.0,
            users_change: 8.1,
            conversion_rate: 3.2,
            conversion_rate_change: -0.5,
            orders: 1_482.0,
            orders_change: 4.2,
        };
        let tiles = stats.tiles();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].unit, "$");
        assert_eq!(tiles[2].trend, Trend::Down);
        assert_eq!(tiles[3].trend, Trend::Up);
    }

    #[test]
    fn test_chart_values_serialize_tagged() {
        let values = ChartValues::Ranked {
            items: vec![NamedValue::new("Books", 10.0)],
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["type"], "ranked");
        assert_eq!(json["items"][0]["name"], "Books");
    }

    #[test]
    fn test_dashboard_title_includes_range() {
        let dashboard = Dashboard::new(View::Overview, TimeRange::Last30Days, vec![], vec![]);
        assert_eq!(dashboard.title, "Dashboard Overview (last 30 days)");
    }
}
