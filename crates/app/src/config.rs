use std::sync::OnceLock;

use shared_types::AppConfig;

const CONFIG_TOML: &str = include_str!("../../../config.toml");

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Portal configuration embedded from `config.toml`.
///
/// A malformed file logs a warning and falls back to the defaults, which
/// enable every feature.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| load(CONFIG_TOML))
}

fn load(contents: &str) -> AppConfig {
    match AppConfig::from_toml_str(contents) {
        Ok(config) => {
            tracing::info!(
                notifications = config.features.notifications,
                qr_login = config.features.qr_login,
                skip_login = config.features.skip_login,
                "portal config loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "invalid config.toml, using defaults");
            AppConfig::default()
        }
    }
}
