pub mod defaults;
pub mod loader;
pub mod properties;

pub use defaults::*;
pub use loader::*;
pub use properties::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::default_theme")]
    pub theme: String,
    #[serde(default = "defaults::default_style")]
    pub style: String,
    #[serde(default)]
    pub segments: Segments,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segments {
    pub directory: Option<SegmentConfig>,
    pub git: Option<SegmentConfig>,
    pub az: Option<SegmentConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentConfig {
    #[serde(default = "defaults::default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub properties: Properties,
}
