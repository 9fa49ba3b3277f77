// Static mock dataset built once at start-up
use crate::domain::metrics::{EngagementSummary, NamedValue, StatSummary, TimeSeriesPoint};
use crate::domain::notification::{Notification, NotificationKind, Priority};
use crate::domain::records::{
    EngagementRow, Forecast, FunnelStage, Impact, Insight, RecentReport, ReportCatalog,
    ReportFormat, ReportStatus, ReportType, Sentiment, UserDirectory, UserRecord, UserStatus,
};
use crate::domain::settings::{
    AppearanceSettings, DataSettings, NotificationSettings, ProfileSettings, SecuritySettings,
    Settings,
};
use crate::infrastructure::config::DatasetSettings;
use anyhow::Context;
use chrono::{Days, NaiveDate};
use std::f64::consts::TAU;

#[derive(Debug, Clone)]
pub struct MockDataset {
    pub revenue: Vec<TimeSeriesPoint>,
    pub users: Vec<TimeSeriesPoint>,
    pub orders: Vec<TimeSeriesPoint>,
    pub categories: Vec<NamedValue>,
    pub products: Vec<NamedValue>,
    pub traffic: Vec<NamedValue>,
    pub stats: StatSummary,
    pub engagement: EngagementSummary,
    pub funnel: Vec<FunnelStage>,
    pub engagement_rows: Vec<EngagementRow>,
    pub insights: Vec<Insight>,
    pub forecasts: Vec<Forecast>,
    pub reports: ReportCatalog,
    pub directory: UserDirectory,
    pub notifications: Vec<Notification>,
    pub settings: Settings,
}

/// Shape of a generated daily series.
struct Wave {
    base: f64,
    growth_per_day: f64,
    weekly_amplitude: f64,
    yearly_amplitude: f64,
}

impl MockDataset {
    pub fn generate(dataset: &DatasetSettings) -> anyhow::Result<Self> {
        let dates = daily_dates(dataset.end_date, dataset.days)?;
        // the seed only shifts the phase, so a given config always yields the same data
        let phase = (dataset.seed % 360) as f64 * TAU / 360.0;

        let revenue = Wave {
            base: 3_200.0,
            growth_per_day: 2.5,
            weekly_amplitude: 650.0,
            yearly_amplitude: 900.0,
        };
        let users = Wave {
            base: 9_000.0,
            growth_per_day: 9.5,
            weekly_amplitude: 320.0,
            yearly_amplitude: 400.0,
        };
        let orders = Wave {
            base: 38.0,
            growth_per_day: 0.03,
            weekly_amplitude: 9.0,
            yearly_amplitude: 6.0,
        };

        Ok(Self {
            revenue: sample_series(&dates, &revenue, phase),
            users: sample_series(&dates, &users, phase),
            orders: sample_series(&dates, &orders, phase),
            categories: named(&[
                ("Electronics", 48_250.0),
                ("Clothing", 32_140.0),
                ("Home & Garden", 27_890.0),
                ("Sports", 21_560.0),
                ("Books", 15_230.0),
                ("Beauty", 12_870.0),
                ("Toys", 9_640.0),
                ("Automotive", 7_420.0),
                ("Groceries", 5_310.0),
            ]),
            products: named(&[
                ("Wireless Earbuds Pro", 18_450.0),
                ("Smart Watch X2", 15_230.0),
                ("Laptop Stand", 12_890.0),
                ("USB-C Hub", 9_870.0),
                ("Mechanical Keyboard", 8_640.0),
                ("Desk Lamp", 6_120.0),
                ("Phone Case", 4_380.0),
            ]),
            traffic: named(&[
                ("Organic Search", 4_520.0),
                ("Direct", 3_210.0),
                ("Social Media", 2_380.0),
                ("Referral", 1_540.0),
                ("Email", 933.0),
            ]),
            stats: StatSummary {
                revenue: 128_745.0,
                revenue_change: 12.3,
                users: 12_583.0,
                users_change: 8.1,
                conversion_rate: 3.2,
                conversion_rate_change: -0.5,
                orders: 1_482.0,
                orders_change: 4.2,
            },
            engagement: EngagementSummary {
                page_views: 45_672.0,
                page_views_change: 15.2,
                click_through: 3.8,
                click_through_change: 0.4,
                avg_session_minutes: 4.2,
                avg_session_minutes_change: -0.3,
                bounce_rate: 42.1,
                bounce_rate_change: -2.1,
            },
            funnel: FunnelStage::from_counts(&[
                ("Visitors", 12_583),
                ("Product Views", 8_945),
                ("Add to Cart", 3_421),
                ("Checkout", 1_876),
                ("Purchase", 1_482),
            ]),
            engagement_rows: vec![
                engagement_row("Daily Active Users", 8_432.0, "", 12.0),
                engagement_row("Weekly Active Users", 24_891.0, "", 8.0),
                engagement_row("Monthly Active Users", 89_234.0, "", 15.0),
                engagement_row("User Retention (7d)", 68.0, "%", 3.0),
                engagement_row("User Retention (30d)", 42.0, "%", 1.0),
            ],
            insights: insights(),
            forecasts: vec![
                forecast("Revenue", "$", 128_745.0, 142_890.0, 87),
                forecast("Users", "", 12_583.0, 13_420.0, 92),
                forecast("Orders", "", 1_482.0, 1_650.0, 84),
                forecast("Conversion Rate", "%", 3.2, 3.4, 79),
            ],
            reports: report_catalog()?,
            directory: UserDirectory::new(users_directory()?),
            notifications: notifications(),
            settings: settings(),
        })
    }
}

fn daily_dates(end_date: NaiveDate, days: usize) -> anyhow::Result<Vec<NaiveDate>> {
    let span = days.saturating_sub(1) as u64;
    let start = end_date
        .checked_sub_days(Days::new(span))
        .with_context(|| format!("{} days before {} is out of range", span, end_date))?;
    Ok(start.iter_days().take(days).collect())
}

fn sample_series(dates: &[NaiveDate], wave: &Wave, phase: f64) -> Vec<TimeSeriesPoint> {
    dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let day = i as f64;
            let value = wave.base
                + wave.growth_per_day * day
                + wave.weekly_amplitude * (TAU * day / 7.0 + phase).sin()
                + wave.yearly_amplitude * (TAU * day / 365.0 + phase).sin();
            TimeSeriesPoint::new(*date, value.max(0.0).round())
        })
        .collect()
}

fn named(entries: &[(&str, f64)]) -> Vec<NamedValue> {
    entries
        .iter()
        .map(|(name, value)| NamedValue::new(*name, *value))
        .collect()
}

fn engagement_row(metric: &str, value: f64, unit: &str, change: f64) -> EngagementRow {
    EngagementRow {
        metric: metric.to_string(),
        value,
        unit: unit.to_string(),
        change,
    }
}

fn forecast(metric: &str, unit: &str, current: f64, predicted: f64, confidence: u8) -> Forecast {
    Forecast {
        metric: metric.to_string(),
        unit: unit.to_string(),
        current,
        predicted,
        confidence,
    }
}

fn insights() -> Vec<Insight> {
    let insight = |title: &str, description: &str, impact, trend| Insight {
        title: title.to_string(),
        description: description.to_string(),
        impact,
        trend,
    };

    vec![
        insight(
            "Revenue Growth Acceleration",
            "Revenue growth has increased by 23% compared to last month, driven by higher conversion rates.",
            Impact::High,
            Sentiment::Positive,
        ),
        insight(
            "User Acquisition Slowdown",
            "New user acquisition has decreased by 8% this week. Consider reviewing marketing campaigns.",
            Impact::Medium,
            Sentiment::Negative,
        ),
        insight(
            "Mobile Traffic Surge",
            "Mobile traffic has increased by 45% over the past 30 days, now representing 68% of total traffic.",
            Impact::High,
            Sentiment::Positive,
        ),
        insight(
            "Seasonal Pattern Detected",
            "Weekend sales consistently outperform weekdays by 35%. Consider weekend-specific promotions.",
            Impact::Medium,
            Sentiment::Positive,
        ),
    ]
}

fn date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date {}", s))
}

fn report_catalog() -> anyhow::Result<ReportCatalog> {
    let report_type = |id: &str, name: &str| ReportType {
        id: id.to_string(),
        name: name.to_string(),
    };
    let recent = [
        ("Monthly Sales Summary", "2024-01-15", "Sales", ReportStatus::Ready),
        ("User Acquisition Report", "2024-01-14", "Users", ReportStatus::Ready),
        ("Product Performance Q4", "2024-01-13", "Products", ReportStatus::Processing),
        ("Revenue Analytics", "2024-01-12", "Sales", ReportStatus::Ready),
        ("Customer Segmentation", "2024-01-11", "Users", ReportStatus::Ready),
    ]
    .into_iter()
    .map(|(name, day, kind, status)| {
        Ok(RecentReport {
            name: name.to_string(),
            date: date(day)?,
            kind: kind.to_string(),
            status,
        })
    })
    .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(ReportCatalog {
        report_types: vec![
            report_type("sales", "Sales Report"),
            report_type("users", "User Report"),
            report_type("products", "Product Report"),
            report_type("performance", "Performance Report"),
        ],
        formats: vec![ReportFormat::Pdf, ReportFormat::Excel, ReportFormat::Csv],
        recent,
    })
}

fn users_directory() -> anyhow::Result<Vec<UserRecord>> {
    [
        (1, "Sarah Johnson", "+1 (555) 123-4567", "New York, NY", "2024-01-15", "2 hours ago", UserStatus::Active, 12, 2_450.0),
        (2, "Michael Chen", "+1 (555) 234-5678", "San Francisco, CA", "2024-01-10", "1 day ago", UserStatus::Active, 8, 1_890.0),
        (3, "Emily Rodriguez", "+1 (555) 345-6789", "Austin, TX", "2024-01-08", "3 days ago", UserStatus::Inactive, 15, 3_200.0),
        (4, "David Kim", "+1 (555) 456-7890", "Seattle, WA", "2024-01-05", "5 hours ago", UserStatus::Active, 6, 980.0),
        (5, "Lisa Thompson", "+1 (555) 567-8901", "Chicago, IL", "2024-01-03", "1 week ago", UserStatus::Inactive, 22, 4_750.0),
    ]
    .into_iter()
    .map(|(id, name, phone, location, joined, last_active, status, orders, total_spent)| {
        Ok(UserRecord {
            id,
            name: name.to_string(),
            email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
            phone: phone.to_string(),
            location: location.to_string(),
            join_date: date(joined)?,
            last_active: last_active.to_string(),
            status,
            orders,
            total_spent,
        })
    })
    .collect()
}

fn notifications() -> Vec<Notification> {
    use NotificationKind::{Error, Info, Success, Warning};
    use Priority::{High, Low, Medium};

    vec![
        Notification::new(1, Success, "Revenue Goal Achieved", "Monthly revenue target of $125,000 has been reached 3 days early.", "2 minutes ago", false, High),
        Notification::new(2, Warning, "Low Inventory Alert", "Product \"Wireless Earbuds Pro\" has only 5 units remaining in stock.", "15 minutes ago", false, Medium),
        Notification::new(3, Info, "New User Registration", "127 new users registered in the last 24 hours.", "1 hour ago", true, Low),
        Notification::new(4, Error, "Payment Processing Error", "Failed to process 3 payments. Manual review required.", "2 hours ago", false, High),
        Notification::new(5, Info, "Weekly Report Ready", "Your weekly analytics report is ready for download.", "3 hours ago", true, Low),
        Notification::new(6, Success, "Backup Completed", "Daily database backup completed successfully.", "6 hours ago", true, Low),
        Notification::new(7, Warning, "High Server Load", "Server CPU usage is at 85%. Consider scaling resources.", "8 hours ago", false, Medium),
        Notification::new(8, Info, "Feature Update", "New dashboard widgets are now available in the analytics section.", "1 day ago", true, Low),
    ]
}

fn settings() -> Settings {
    Settings {
        profile: ProfileSettings {
            name: "John Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            timezone: "America/New_York".to_string(),
            language: "en".to_string(),
        },
        notifications: NotificationSettings {
            email_notifications: true,
            push_notifications: true,
            weekly_reports: true,
            marketing_emails: false,
            security_alerts: true,
        },
        security: SecuritySettings {
            two_factor_auth: false,
            session_timeout_minutes: 30,
            password_expiry_days: 90,
        },
        appearance: AppearanceSettings {
            theme: "dark".to_string(),
            sidebar_collapsed: false,
            compact_mode: false,
            animations: true,
        },
        data: DataSettings {
            data_retention_days: 365,
            auto_backup: true,
            export_format: "json".to_string(),
        },
    }
}
