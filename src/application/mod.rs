// Application layer - Use cases over the metrics repository
pub mod aggregation;
pub mod dashboard_service;
pub mod metrics_repository;
pub mod notification_service;
pub mod streaming_service;
