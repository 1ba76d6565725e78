use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const EMBEDDED_SETTINGS: &str = include_str!("../../config/settings.yaml");

pub const MIN_ANALYSIS_DELAY_MS: u64 = 1500;
pub const MAX_ANALYSIS_DELAY_MS: u64 = 2500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub version: f32,
    pub analysis: AnalysisSettings,
    pub upload: UploadSettings,
    pub notices: NoticeSettings,
    pub assistant: AssistantSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    pub delay_ms: u64,
    pub failure_rate: f64,
    #[serde(default = "default_auto_classify")]
    pub auto_classify: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSettings {
    /// Shown to the user only; uploads are not size-checked.
    pub max_upload_mb: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeSettings {
    pub duration_ms: u32,
    pub max_visible: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantSettings {
    pub reply_delay_ms: u32,
}

fn default_auto_classify() -> bool {
    true
}

impl Settings {
    pub fn from_yaml_str(source: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_yaml::from_str(source)?;
        Ok(settings)
    }

    pub fn embedded() -> Self {
        match Self::from_yaml_str(EMBEDDED_SETTINGS) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Embedded settings are invalid, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn analysis_delay(&self) -> Duration {
        let ms = self
            .analysis
            .delay_ms
            .clamp(MIN_ANALYSIS_DELAY_MS, MAX_ANALYSIS_DELAY_MS);
        Duration::from_millis(ms)
    }

    pub fn failure_rate(&self) -> f64 {
        if self.analysis.failure_rate.is_finite() {
            self.analysis.failure_rate.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: 1.0,
            analysis: AnalysisSettings {
                delay_ms: 2000,
                failure_rate: 0.1,
                auto_classify: true,
            },
            upload: UploadSettings { max_upload_mb: 10 },
            notices: NoticeSettings {
                duration_ms: 4000,
                max_visible: 3,
            },
            assistant: AssistantSettings {
                reply_delay_ms: 1500,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_settings_match_defaults() {
        assert_eq!(Settings::embedded(), Settings::default());
    }

    #[test]
    fn analysis_delay_is_clamped_to_window() {
        let mut settings = Settings::default();
        settings.analysis.delay_ms = 50;
        assert_eq!(settings.analysis_delay(), Duration::from_millis(1500));

        settings.analysis.delay_ms = 10_000;
        assert_eq!(settings.analysis_delay(), Duration::from_millis(2500));

        settings.analysis.delay_ms = 2000;
        assert_eq!(settings.analysis_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn failure_rate_is_bounded() {
        let mut settings = Settings::default();
        settings.analysis.failure_rate = 3.0;
        assert_eq!(settings.failure_rate(), 1.0);
        settings.analysis.failure_rate = f64::NAN;
        assert_eq!(settings.failure_rate(), 0.0);
    }

    #[test]
    fn auto_classify_defaults_on_when_missing() {
        let yaml = r#"
version: 1.0
analysis: { delay_ms: 1800, failure_rate: 0.0 }
upload: { max_upload_mb: 5 }
notices: { duration_ms: 1000, max_visible: 1 }
assistant: { reply_delay_ms: 10 }
"#;
        let settings = Settings::from_yaml_str(yaml).unwrap();
        assert!(settings.analysis.auto_classify);
        assert_eq!(settings.upload.max_upload_mb, 5);
    }

    #[test]
    fn malformed_settings_are_rejected() {
        assert!(Settings::from_yaml_str("analysis: [").is_err());
    }
}
