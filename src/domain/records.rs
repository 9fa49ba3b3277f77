// Tabular records shown alongside the charts (analytics, trends, reports, users)
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStage {
    pub stage: String,
    pub count: u64,
    /// Share of the first stage, rounded to a whole percent
    pub percentage: u32,
}

impl FunnelStage {
    /// Builds funnel stages from ordered (stage, count) pairs.
    pub fn from_counts(stages: &[(&str, u64)]) -> Vec<FunnelStage> {
        let top = stages.first().map(|(_, count)| *count).unwrap_or(0);

        stages
            .iter()
            .map(|(stage, count)| {
                let percentage = if top == 0 {
                    0
                } else {
                    (*count as f64 / top as f64 * 100.0).round() as u32
                };
                FunnelStage {
                    stage: stage.to_string(),
                    count: *count,
                    percentage,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementRow {
    pub metric: String,
    pub value: f64,
    pub unit: String,
    pub change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub trend: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub metric: String,
    pub unit: String,
    pub current: f64,
    pub predicted: f64,
    /// Confidence in percent
    pub confidence: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportType {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ready,
    Processing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentReport {
    pub name: String,
    pub date: NaiveDate,
    pub kind: String,
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Pdf,
    Excel,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportCatalog {
    pub report_types: Vec<ReportType>,
    pub formats: Vec<ReportFormat>,
    pub recent: Vec<RecentReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub join_date: NaiveDate,
    pub last_active: String,
    pub status: UserStatus,
    pub orders: u32,
    pub total_spent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub total_orders: u32,
    pub total_spent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDirectory {
    pub summary: UserSummary,
    pub users: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        let active = users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count();
        let summary = UserSummary {
            total: users.len(),
            active,
            inactive: users.len() - active,
            total_orders: users.iter().map(|u| u.orders).sum(),
            total_spent: users.iter().map(|u| u.total_spent).sum(),
        };
        Self { summary, users }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funnel_percentages() {
        let funnel = FunnelStage::from_counts(&[
            ("Visitors", 12_583),
            ("Product Views", 8_945),
            ("Add to Cart", 3_421),
            ("Checkout", 1_876),
            ("Purchase", 1_482),
        ]);
        let percentages: Vec<u32> = funnel.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![100, 71, 27, 15, 12]);
    }

    #[test]
    fn test_funnel_empty_top_stage() {
        let funnel = FunnelStage::from_counts(&[("Visitors", 0), ("Purchase", 0)]);
        assert!(funnel.iter().all(|s| s.percentage == 0));
        assert!(FunnelStage::from_counts(&[]).is_empty());
    }

    #[test]
    fn test_user_directory_summary() {
        let user = |id: u32, status: UserStatus, orders: u32, spent: f64| UserRecord {
            id,
            name: format!("User {}", id),
            email: format!("user{}@email.com", id),
            phone: String::new(),
            location: String::new(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            last_active: "1 day ago".to_string(),
            status,
            orders,
            total_spent: spent,
        };
        let directory = UserDirectory::new(vec![
            user(1, UserStatus::Active, 3, 100.0),
            user(2, UserStatus::Inactive, 5, 250.0),
            user(3, UserStatus::Active, 1, 50.0),
        ]);
        assert_eq!(directory.summary.total, 3);
        assert_eq!(directory.summary.active, 2);
        assert_eq!(directory.summary.inactive, 1);
        assert_eq!(directory.summary.total_orders, 9);
        assert_eq!(directory.summary.total_spent, 400.0);
    }
}
