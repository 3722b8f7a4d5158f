use crate::utils::error::LeafError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Arguments the driver feeds to each helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverInputs {
    pub prime_candidate: i64,
    pub reverse_text: String,
    pub count_text: String,
    pub count_pattern: String,
}

impl Default for DriverInputs {
    fn default() -> Self {
        Self {
            prime_candidate: 19,
            reverse_text: "callicoder".to_string(),
            count_text: "Go is Awesome. I love Go".to_string(),
            count_pattern: "Go".to_string(),
        }
    }
}

/// One value per helper, in print order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub is_prime: bool,
    pub greeting: String,
    pub reversed: String,
    pub count: usize,
}

impl Report {
    pub fn lines(&self) -> [String; 4] {
        [
            self.is_prime.to_string(),
            self.greeting.clone(),
            self.reversed.clone(),
            self.count.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = LeafError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(LeafError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}
