use crate::api::traits::ActivityApi;
use crate::api::types::ActivityQuery;
use crate::config::AppConfig;
use crate::display::ReservationStatus;
use crate::models::{ActivityDetail, ActivityPage, DailySchedule, ReservationPage, ReviewPage};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// JSON client for the activity booking API
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: None,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = Self::new(&config.api_base_url, config.request_timeout)?;
        Ok(match &config.access_token {
            Some(token) => client.with_access_token(token),
            None => client,
        })
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let request = self.client.get(url);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> Result<T> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", what))?;

        if !response.status().is_success() {
            warn!("API returned status {} for {}", response.status(), what);
            anyhow::bail!("Failed to fetch {}: {}", what, response.status());
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode {}", what))
    }
}

#[async_trait]
impl ActivityApi for ApiClient {
    async fn list_activities(&self, query: &ActivityQuery) -> Result<ActivityPage> {
        let request = self.get("/activities").query(&query.to_params());
        let page: ActivityPage = self.fetch(request, "activities").await?;
        debug!("Fetched {} of {} activities", page.activities.len(), page.total_count);
        Ok(page)
    }

    async fn get_activity(&self, id: i64) -> Result<ActivityDetail> {
        let request = self.get(&format!("/activities/{}", id));
        self.fetch(request, &format!("activity {}", id)).await
    }

    async fn available_schedule(
        &self,
        id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<DailySchedule>> {
        let request = self
            .get(&format!("/activities/{}/available-schedule", id))
            .query(&[("year", year.to_string()), ("month", format!("{:02}", month))]);
        self.fetch(request, &format!("schedule of activity {}", id)).await
    }

    async fn reviews(&self, id: i64, page: u32, size: u32) -> Result<ReviewPage> {
        let request = self
            .get(&format!("/activities/{}/reviews", id))
            .query(&[("page", page), ("size", size)]);
        self.fetch(request, &format!("reviews of activity {}", id)).await
    }

    async fn my_reservations(&self, status: Option<ReservationStatus>) -> Result<ReservationPage> {
        let mut request = self.get("/my-reservations").query(&[("size", 10)]);
        if let Some(status) = status {
            request = request.query(&[("status", status.code())]);
        }
        self.fetch(request, "reservations").await
    }
}
