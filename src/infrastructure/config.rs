use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub widgets: WidgetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter used when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetSettings {
    /// Length of the generated daily series
    pub days: usize,
    /// Date of the newest sample
    pub end_date: NaiveDate,
    pub seed: u64,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            days: 365,
            end_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            seed: 42,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WidgetsConfig {
    pub bar_top_n: usize,
    pub horizontal_bar_top_n: usize,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            bar_top_n: 8,
            horizontal_bar_top_n: 5,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.dataset.days == 0 {
            anyhow::bail!("dataset.days must be at least 1");
        }
        if self.widgets.bar_top_n == 0 || self.widgets.horizontal_bar_top_n == 0 {
            anyhow::bail!("widgets top-n sizes must be at least 1");
        }
        Ok(())
    }
}

/// Load `config/dashboard.*` (optional) with `DASHBOARD__SECTION__KEY` env overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()
        .context("Failed to read dashboard configuration")?;

    let app_config: AppConfig = settings
        .try_deserialize()
        .context("Invalid dashboard configuration")?;
    app_config.validate()?;
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> anyhow::Result<AppConfig> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = from_toml("").unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.dataset.days, 365);
        assert_eq!(config.dataset.end_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(config.widgets.bar_top_n, 8);
        assert_eq!(config.widgets.horizontal_bar_top_n, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = from_toml(
            r#"
            [dataset]
            days = 120
            end_date = "2023-06-30"

            [widgets]
            bar_top_n = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset.days, 120);
        assert_eq!(config.dataset.end_date, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());
        assert_eq!(config.dataset.seed, 42);
        assert_eq!(config.widgets.bar_top_n, 3);
        assert_eq!(config.widgets.horizontal_bar_top_n, 5);
    }

    #[test]
    fn test_validate_rejects_empty_dataset() {
        let config = from_toml("[dataset]\ndays = 0").unwrap();
        assert!(config.validate().is_err());
    }
}
