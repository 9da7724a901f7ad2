use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Feature flags controlling optional portal features.
///
/// Every field defaults to `true` except where noted so that a missing
/// `[features]` table keeps the full prototype behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Notification bell in the portal top bar.
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// "Scan QR" identity verification on the login form.
    #[serde(default = "default_true")]
    pub qr_login: bool,
    /// "Skip Login" shortcut after choosing a role.
    #[serde(default = "default_true")]
    pub skip_login: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            notifications: true,
            qr_login: true,
            skip_login: true,
        }
    }
}

/// Timing and identity knobs for the simulated workflows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalSettings {
    /// Simulated camera scan before QR login completes.
    #[serde(default = "default_qr_scan_delay_ms")]
    pub qr_scan_delay_ms: u64,
    /// Interval between report generation progress updates.
    #[serde(default = "default_report_tick_ms")]
    pub report_tick_ms: u64,
    /// Percentage added on every report tick.
    #[serde(default = "default_report_progress_step")]
    pub report_progress_step: u8,
    /// Simulated fetch behind the dashboard "Refresh" buttons.
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
    /// Gap between "generated" and "download complete" on quick exports.
    #[serde(default = "default_download_delay_ms")]
    pub download_delay_ms: u64,
    /// Short code shown in the portal brand.
    #[serde(default = "default_institution_code")]
    pub institution_code: String,
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            qr_scan_delay_ms: default_qr_scan_delay_ms(),
            report_tick_ms: default_report_tick_ms(),
            report_progress_step: default_report_progress_step(),
            refresh_delay_ms: default_refresh_delay_ms(),
            download_delay_ms: default_download_delay_ms(),
            institution_code: default_institution_code(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub portal: PortalSettings,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        toml::from_str(contents).map_err(|e| AppError::bad_request(format!("Invalid config: {e}")))
    }
}

fn default_true() -> bool {
    true
}

fn default_qr_scan_delay_ms() -> u64 {
    2000
}

fn default_report_tick_ms() -> u64 {
    300
}

fn default_report_progress_step() -> u8 {
    10
}

fn default_refresh_delay_ms() -> u64 {
    1000
}

fn default_download_delay_ms() -> u64 {
    1500
}

fn default_institution_code() -> String {
    "NIAMT".to_string()
}
