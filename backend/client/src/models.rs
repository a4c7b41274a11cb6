use std::collections::BTreeMap;

use dataset::FoodRecord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    pub total_foods: usize,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
    #[serde(default)]
    pub example_searches: Vec<String>,
}

#[derive(Deserialize)]
pub struct FoodList {
    pub foods: Vec<String>,
}

#[derive(Deserialize)]
pub struct SuggestionList {
    pub suggestions: Vec<String>,
}

#[derive(Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One dish as returned by `/food/{name}` and `/search`, with the stored casing of its name.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub name: String,
    pub record: FoodRecord,
}

impl Dish {
    pub(crate) fn from_body(body: BTreeMap<String, FoodRecord>) -> Option<Self> {
        body.into_iter()
            .next()
            .map(|(name, record)| Self { name, record })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: HealthStatus,
    pub api_status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Health {
    pub fn connected(message: String) -> Self {
        Self {
            status: HealthStatus::Healthy,
            api_status: "connected",
            api_message: Some(message),
            error: None,
        }
    }

    pub fn disconnected(error: String) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            api_status: "disconnected",
            api_message: None,
            error: Some(error),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}
