use crate::geocoding::sdk::{GeocodeCallback, GeocodeResponse, MapSdk};
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://naveropenapi.apigw.ntruss.com/map-geocode/v2/geocode";

/// Map SDK backed by the Naver Maps geocoding REST endpoint.
///
/// Each lookup runs on its own tokio task and reports back through the
/// callback, so `geocode` must be called from inside a runtime.
#[derive(Clone)]
pub struct NaverGeocodeSdk {
    client: Client,
    endpoint: String,
    client_id: String,
    client_secret: String,
}

impl NaverGeocodeSdk {
    pub fn new(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create geocoding HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        })
    }

    async fn lookup(&self, query: &str) -> (u16, GeocodeResponse) {
        debug!("Geocoding '{}' via {}", query, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query)])
            .header("X-NCP-APIGW-API-KEY-ID", &self.client_id)
            .header("X-NCP-APIGW-API-KEY", &self.client_secret)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!("Geocoding request failed: {}", e);
                return (500, GeocodeResponse::default());
            }
        };

        let status = response.status().as_u16();
        let body = match response.json::<GeocodeResponse>().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Geocoding body unreadable (status {}): {}", status, e);
                GeocodeResponse::default()
            }
        };

        (status, body)
    }
}

impl MapSdk for NaverGeocodeSdk {
    fn geocode(&self, query: &str, callback: GeocodeCallback) {
        let sdk = self.clone();
        let query = query.to_string();

        tokio::spawn(async move {
            let (status, body) = sdk.lookup(&query).await;
            callback(status, body);
        });
    }
}
