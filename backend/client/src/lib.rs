//! # Nutrition Client
//!
//! HTTP facade over the nutrition query service.
//!
//! - One shared `reqwest` client, 10 second timeout by default
//! - The full food list is fetched once per client and reused afterwards
//! - Failures are split into "dish absent" ([`ClientError::NotFound`]), bad input
//!   ([`ClientError::InvalidRequest`]) and "service unreachable"
//!   ([`ClientError::UpstreamUnavailable`]) so callers can map them to 404/400/503
use std::{collections::BTreeMap, time::Duration};

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tracing::debug;

use dataset::FoodRecord;

pub mod error;
pub mod models;
pub mod utils;

pub use error::ClientError;
use models::{Dish, ErrorBody, FoodList, Health, SuggestionList, Welcome};
use utils::normalize;

pub struct NutritionClient {
    base_url: Url,
    http: Client,
    foods: OnceCell<Vec<String>>,
}

impl NutritionClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self {
            base_url,
            http,
            foods: OnceCell::new(),
        })
    }

    pub async fn welcome(&self) -> Result<Welcome, ClientError> {
        self.get(&["welcome"], &[]).await
    }

    /// Every dish name, fetched on first use then served from memory.
    pub async fn all_foods(&self) -> Result<&[String], ClientError> {
        self.foods
            .get_or_try_init(|| async {
                let list: FoodList = self.get(&["foods"], &[]).await?;
                Ok::<_, ClientError>(list.foods)
            })
            .await
            .map(Vec::as_slice)
    }

    pub async fn search(&self, dish: &str) -> Result<Dish, ClientError> {
        let dish = normalize(dish)
            .ok_or_else(|| ClientError::InvalidRequest("Please provide a dish name".to_string()))?;

        let body = self.get(&["search"], &[("dish", dish)]).await?;
        to_dish(body)
    }

    /// Direct lookup by path. Names with `/` are percent-encoded into a single segment.
    pub async fn food(&self, name: &str) -> Result<Dish, ClientError> {
        let name = normalize(name)
            .ok_or_else(|| ClientError::InvalidRequest("Please provide a dish name".to_string()))?;

        let body = self.get(&["food", name], &[]).await?;
        to_dish(body)
    }

    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>, ClientError> {
        let list: SuggestionList = self.get(&["suggestions"], &[("q", query.trim())]).await?;

        Ok(list.suggestions)
    }

    pub async fn health(&self) -> Health {
        match self.welcome().await {
            Ok(welcome) => Health::connected(welcome.message),
            Err(e) => Health::disconnected(e.to_string()),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let url = self.endpoint(segments)?;
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Decode(e.to_string()));
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());

        Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::InvalidRequest(message),
            StatusCode::SERVICE_UNAVAILABLE => ClientError::UpstreamUnavailable(message),
            _ => ClientError::UnexpectedStatus {
                status: status.as_u16(),
                message,
            },
        })
    }
}

fn to_dish(body: BTreeMap<String, FoodRecord>) -> Result<Dish, ClientError> {
    Dish::from_body(body).ok_or_else(|| ClientError::Decode("empty dish response".to_string()))
}
