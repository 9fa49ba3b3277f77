// Domain layer - Business metrics, dashboard widgets and view records
pub mod dashboard;
pub mod metrics;
pub mod notification;
pub mod records;
pub mod settings;
pub mod time_range;
