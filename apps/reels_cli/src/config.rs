use std::{fs, path::Path, time::Duration};

use client_core::{FeedOptions, LatencyProfile};
use serde::Deserialize;
use shared::domain::FeedFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub feed_latency_ms: u64,
    pub feed_jitter_ms: u64,
    pub feed_timeout_ms: Option<u64>,
    pub initial_filter: FeedFilter,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://./data/reels.db".into(),
            feed_latency_ms: 500,
            feed_jitter_ms: 0,
            feed_timeout_ms: None,
            initial_filter: FeedFilter::All,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn latency(&self) -> LatencyProfile {
        LatencyProfile {
            base: Duration::from_millis(self.feed_latency_ms),
            jitter: Duration::from_millis(self.feed_jitter_ms),
        }
    }

    pub fn feed_options(&self) -> FeedOptions {
        FeedOptions {
            initial_filter: self.initial_filter,
            load_timeout: self.feed_timeout_ms.map(Duration::from_millis),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    database_url: Option<String>,
    feed_latency_ms: Option<u64>,
    feed_jitter_ms: Option<u64>,
    feed_timeout_ms: Option<u64>,
    initial_filter: Option<String>,
    log_filter: Option<String>,
}

pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) else {
        return;
    };

    if let Some(v) = file_cfg.database_url {
        settings.database_url = v;
    }
    if let Some(v) = file_cfg.feed_latency_ms {
        settings.feed_latency_ms = v;
    }
    if let Some(v) = file_cfg.feed_jitter_ms {
        settings.feed_jitter_ms = v;
    }
    if let Some(v) = file_cfg.feed_timeout_ms {
        settings.feed_timeout_ms = Some(v);
    }
    if let Some(v) = file_cfg.initial_filter {
        settings.initial_filter = FeedFilter::from_label_lossy(&v);
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = lookup("APP__DATABASE_URL") {
        settings.database_url = v;
    }

    if let Some(v) = lookup("APP__FEED_LATENCY_MS").and_then(|v| v.parse().ok()) {
        settings.feed_latency_ms = v;
    }
    if let Some(v) = lookup("APP__FEED_JITTER_MS").and_then(|v| v.parse().ok()) {
        settings.feed_jitter_ms = v;
    }
    if let Some(v) = lookup("APP__FEED_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
        settings.feed_timeout_ms = Some(v);
    }
    if let Some(v) = lookup("APP__INITIAL_FILTER") {
        settings.initial_filter = FeedFilter::from_label_lossy(&v);
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

pub fn normalize_database_url(raw_database_url: &str) -> String {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() {
        return Settings::default().database_url;
    }

    if raw_database_url.starts_with("sqlite::memory:")
        || raw_database_url.starts_with("sqlite://")
        || raw_database_url.contains("://")
    {
        return raw_database_url.to_string();
    }

    if let Some(path) = raw_database_url.strip_prefix("sqlite:") {
        let path = path.replace('\\', "/");
        return format!("sqlite://{path}");
    }

    format!("sqlite://{}", raw_database_url.replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn normalizes_plain_file_path_to_sqlite_url() {
        assert_eq!(
            normalize_database_url("./data/test.db"),
            "sqlite://./data/test.db"
        );
        assert_eq!(normalize_database_url("sqlite:data/x.db"), "sqlite://data/x.db");
        assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(normalize_database_url("  "), Settings::default().database_url);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut settings = Settings::default();
        apply_file(
            &mut settings,
            r#"
            database_url = "sqlite://./tmp/app.db"
            feed_latency_ms = 50
            feed_timeout_ms = 2000
            initial_filter = "trending"
            "#,
        );

        assert_eq!(settings.database_url, "sqlite://./tmp/app.db");
        assert_eq!(settings.feed_latency_ms, 50);
        assert_eq!(settings.feed_jitter_ms, 0);
        assert_eq!(settings.feed_timeout_ms, Some(2000));
        assert_eq!(settings.initial_filter, FeedFilter::Trending);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn malformed_file_is_ignored() {
        let mut settings = Settings::default();
        apply_file(&mut settings, "feed_latency_ms = \"soon\"");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn env_overrides_file_and_skips_unparsable_numbers() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("DATABASE_URL", "sqlite://./a.db"),
            ("APP__DATABASE_URL", "sqlite://./b.db"),
            ("APP__FEED_LATENCY_MS", "not-a-number"),
            ("APP__FEED_JITTER_MS", "25"),
            ("APP__INITIAL_FILTER", "unknown"),
        ]);
        let mut settings = Settings {
            initial_filter: FeedFilter::Premium,
            ..Settings::default()
        };
        apply_env(&mut settings, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(settings.database_url, "sqlite://./b.db");
        assert_eq!(settings.feed_latency_ms, 500);
        assert_eq!(settings.feed_jitter_ms, 25);
        assert_eq!(settings.initial_filter, FeedFilter::All);
    }

    #[test]
    fn settings_map_onto_feed_options() {
        let settings = Settings {
            feed_latency_ms: 100,
            feed_jitter_ms: 20,
            feed_timeout_ms: Some(750),
            ..Settings::default()
        };
        assert_eq!(settings.latency().base, Duration::from_millis(100));
        assert_eq!(settings.latency().jitter, Duration::from_millis(20));
        assert_eq!(
            settings.feed_options().load_timeout,
            Some(Duration::from_millis(750))
        );
    }
}
