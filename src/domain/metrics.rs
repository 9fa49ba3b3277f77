// Business metric domain models
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A labelled value without a time dimension (sales category, product, traffic source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    /// Percentage of the whole set, 0..=100
    pub share: f64,
}

/// How daily samples are merged when a range re-buckets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Sum,
    Mean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    Revenue,
    Users,
    Orders,
}

impl MetricId {
    pub fn aggregation(&self) -> Aggregation {
        match self {
            MetricId::Revenue | MetricId::Orders => Aggregation::Sum,
            // daily user counts are levels, summing them double counts
            MetricId::Users => Aggregation::Mean,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownId {
    SalesByCategory,
    TopProducts,
    TrafficSources,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// Headline business figures with their change against the previous period (percent).
#[derive(Debug, Clone, PartialEq)]
pub struct StatSummary {
    pub revenue: f64,
    pub revenue_change: f64,
    pub users: f64,
    pub users_change: f64,
    pub conversion_rate: f64,
    pub conversion_rate_change: f64,
    pub orders: f64,
    pub orders_change: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngagementSummary {
    pub page_views: f64,
    pub page_views_change: f64,
    pub click_through: f64,
    pub click_through_change: f64,
    pub avg_session_minutes: f64,
    pub avg_session_minutes_change: f64,
    pub bounce_rate: f64,
    pub bounce_rate_change: f64,
}
