use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a setting's text value is to be interpreted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    String,
    Number,
    Boolean,
    Json,
}

impl SettingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingType::String => "string",
            SettingType::Number => "number",
            SettingType::Boolean => "boolean",
            SettingType::Json => "json",
        }
    }

    /// Check that `value` can be read back as this type
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            SettingType::String => Ok(()),
            SettingType::Number => value
                .trim()
                .parse::<f64>()
                .map(|_| ())
                .map_err(|_| format!("'{}' is not a number", value)),
            SettingType::Boolean => match value.trim() {
                "true" | "false" => Ok(()),
                _ => Err(format!("'{}' is not a boolean (expected true or false)", value)),
            },
            SettingType::Json => serde_json::from_str::<serde_json::Value>(value)
                .map(|_| ())
                .map_err(|e| format!("invalid JSON: {}", e)),
        }
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(SettingType::String),
            "number" => Ok(SettingType::Number),
            "boolean" => Ok(SettingType::Boolean),
            "json" => Ok(SettingType::Json),
            other => Err(format!("unknown setting type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSetting {
    pub id: i64,
    pub key: String,
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub setting_type: SettingType,
    pub category: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

/// One key-addressed overwrite in a settings update batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingUpdate {
    pub key: String,
    pub value: String,
}

impl SettingUpdate {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
