use crate::utils::debug_with_context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Option keys a segment can look up in its `properties` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// directory: show only the last path component
    Basename,
    /// git: append the short commit hash
    DisplaySha,
    /// az: text placed between subscription name and id
    #[serde(rename = "info_separator")]
    SubscriptionInfoSeparator,
    /// az: show the subscription id
    #[serde(rename = "display_id")]
    DisplaySubscriptionId,
    /// az: show the subscription name
    #[serde(rename = "display_name")]
    DisplaySubscriptionName,
}

/// Typed option lookup handed to segments.
pub trait SegmentProperties {
    fn get_string(&self, property: Property, default: &str) -> String;
    fn get_bool(&self, property: Property, default: bool) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    values: HashMap<Property, Value>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: Property, value: impl Into<Value>) -> Self {
        self.values.insert(property, value.into());
        self
    }

    pub fn set(&mut self, property: Property, value: impl Into<Value>) {
        self.values.insert(property, value.into());
    }
}

impl SegmentProperties for Properties {
    fn get_string(&self, property: Property, default: &str) -> String {
        match self.values.get(&property) {
            Some(Value::String(value)) => value.clone(),
            Some(other) => {
                debug_with_context(
                    "config",
                    &format!("Expected string for {:?}, got {}", property, other),
                );
                default.to_string()
            }
            None => default.to_string(),
        }
    }

    fn get_bool(&self, property: Property, default: bool) -> bool {
        match self.values.get(&property) {
            Some(Value::Bool(value)) => *value,
            Some(other) => {
                debug_with_context(
                    "config",
                    &format!("Expected bool for {:?}, got {}", property, other),
                );
                default
            }
            None => default,
        }
    }
}
