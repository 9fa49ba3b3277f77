// User settings document (read-only)
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub security: SecuritySettings,
    pub appearance: AppearanceSettings,
    pub data: DataSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub timezone: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub weekly_reports: bool,
    pub marketing_emails: bool,
    pub security_alerts: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecuritySettings {
    pub two_factor_auth: bool,
    pub session_timeout_minutes: u32,
    pub password_expiry_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppearanceSettings {
    pub theme: String,
    pub sidebar_collapsed: bool,
    pub compact_mode: bool,
    pub animations: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSettings {
    pub data_retention_days: u32,
    pub auto_backup: bool,
    pub export_format: String,
}
