use crate::config::*;

pub(crate) fn default_theme() -> String {
    "dark".to_string()
}

pub(crate) fn default_style() -> String {
    "minimal".to_string()
}

pub(crate) fn default_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            style: default_style(),
            segments: Segments::default(),
        }
    }
}

impl Default for Segments {
    fn default() -> Self {
        Self {
            directory: Some(SegmentConfig::default()),
            git: Some(SegmentConfig::default()),
            az: Some(SegmentConfig::default()),
        }
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            properties: Properties::default(),
        }
    }
}
