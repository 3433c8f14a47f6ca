use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use wayfare_core::models::FlightQuery;
use wayfare_core::repository::FlightGateway;
use wayfare_core::GatewayError;

use crate::app_config::FlightApiConfig;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// Relay to the hosted flight-search provider. Builds the provider query,
/// attaches the configured credentials as headers, and passes the response
/// payload through unmodified.
pub struct SkyRelayGateway {
    http: reqwest::Client,
    base_url: String,
    host: String,
    key: String,
}

impl SkyRelayGateway {
    pub fn new(config: &FlightApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            host: config.host.clone(),
            key: config.key.clone(),
        })
    }
}

/// Provider leg format: a JSON array with one leg object per flight.
fn build_legs(query: &FlightQuery) -> String {
    serde_json::json!([{
        "origin": query.origin,
        "destination": query.destination,
        "date": query.date,
    }])
    .to_string()
}

#[async_trait]
impl FlightGateway for SkyRelayGateway {
    async fn search(&self, query: &FlightQuery) -> Result<Value, GatewayError> {
        let legs = build_legs(query);
        let adults = query.passengers.to_string();

        info!(
            origin = %query.origin,
            destination = %query.destination,
            date = %query.date,
            "relaying flight search upstream"
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("legs", legs.as_str()),
                ("adults", adults.as_str()),
                ("currency", "USD"),
                ("locale", "en-US"),
                ("market", "en-US"),
                ("cabinClass", "economy"),
                ("countryCode", "US"),
            ])
            .header("x-rapidapi-key", &self.key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))
    }
}
