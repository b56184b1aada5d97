use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::models::{Coordinate, TripCost};
use crate::services::trip_cost::{TripCostError, TripCostProvider};

const ORIGIN_DESTINATION_PATH: &str = "/toll/v2/origin-destination-waypoints";

/// TollGuru API client
///
/// Sends a single origin/destination request per estimate and reads
/// `route.costs.{overall,fuel,tolls}` from the reply.
pub struct TollGuruClient {
    base_url: String,
    api_key: Option<String>,
    vehicle_type: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct Waypoint {
    lat: f64,
    lng: f64,
}

impl From<Coordinate> for Waypoint {
    fn from(c: Coordinate) -> Self {
        Self {
            lat: c.latitude,
            lng: c.longitude,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OriginDestinationRequest {
    from: Waypoint,
    to: Waypoint,
    vehicle_type: String,
}

impl TollGuruClient {
    /// Create a new TollGuru client
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        vehicle_type: String,
        timeout: Duration,
    ) -> Result<Self, TripCostError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TripCostError::NotConfigured(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            api_key: api_key.filter(|k| !k.is_empty()),
            vehicle_type,
            client,
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ORIGIN_DESTINATION_PATH)
    }
}

/// Pull the three cost figures out of a TollGuru reply
fn parse_costs(json: &Value) -> Result<TripCost, TripCostError> {
    let route = json
        .get("route")
        .and_then(|r| r.as_object())
        .ok_or_else(|| TripCostError::ProviderResponseInvalid("Missing route object".into()))?;

    let costs = route
        .get("costs")
        .and_then(|c| c.as_object())
        .ok_or_else(|| TripCostError::ProviderResponseInvalid("Cost data missing in response".into()))?;

    let field = |name: &str| {
        costs.get(name).and_then(|v| v.as_f64()).ok_or_else(|| {
            TripCostError::ProviderResponseInvalid(format!("Missing cost field: {}", name))
        })
    };

    Ok(TripCost {
        total_cost: field("overall")?,
        fuel_cost: field("fuel")?,
        toll_cost: field("tolls")?,
    })
}

#[async_trait]
impl TripCostProvider for TollGuruClient {
    async fn estimate(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<TripCost, TripCostError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| TripCostError::NotConfigured("TOLLGURU_API_KEY not set".into()))?;

        let payload = OriginDestinationRequest {
            from: origin.into(),
            to: destination.into(),
            vehicle_type: self.vehicle_type.clone(),
        };

        tracing::debug!("Requesting trip cost from {:?} to {:?}", origin, destination);

        let response = self
            .client
            .post(self.url())
            .header("x-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("TollGuru returned {}: {}", status, body);
            return Err(TripCostError::ProviderUnavailable(format!(
                "Provider returned {}",
                status
            )));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| TripCostError::ProviderResponseInvalid(e.to_string()))?;

        parse_costs(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client(base_url: String, api_key: Option<&str>) -> TollGuruClient {
        TollGuruClient::new(
            base_url,
            api_key.map(str::to_string),
            "2AxlesAuto".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_costs() {
        let json = serde_json::json!({
            "route": { "costs": { "overall": 12.5, "fuel": 8.0, "tolls": 4.5, "cash": 5 } }
        });
        let cost = parse_costs(&json).unwrap();
        assert_eq!(cost.total_cost, 12.5);
        assert_eq!(cost.fuel_cost, 8.0);
        assert_eq!(cost.toll_cost, 4.5);
    }

    #[test]
    fn test_parse_costs_missing_route() {
        let json = serde_json::json!({ "status": "OK" });
        assert!(matches!(
            parse_costs(&json),
            Err(TripCostError::ProviderResponseInvalid(_))
        ));
    }

    #[test]
    fn test_parse_costs_null_field() {
        let json = serde_json::json!({
            "route": { "costs": { "overall": 3.0, "fuel": null, "tolls": 1.0 } }
        });
        assert!(matches!(
            parse_costs(&json),
            Err(TripCostError::ProviderResponseInvalid(_))
        ));
    }

    #[tokio::test]
    async fn test_estimate_sends_origin_and_destination() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", ORIGIN_DESTINATION_PATH)
            .match_header("x-api-key", "secret")
            .match_body(Matcher::Json(serde_json::json!({
                "from": { "lat": 40.0, "lng": -73.0 },
                "to": { "lat": 40.5, "lng": -73.5 },
                "vehicleType": "2AxlesAuto"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"route": {"costs": {"overall": 20.0, "fuel": 15.0, "tolls": 5.0}}}"#)
            .create_async()
            .await;

        let cost = client(server.url(), Some("secret"))
            .estimate(Coordinate::new(40.0, -73.0), Coordinate::new(40.5, -73.5))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(cost.total_cost, 20.0);
        assert_eq!(cost.fuel_cost, 15.0);
        assert_eq!(cost.toll_cost, 5.0);
    }

    #[tokio::test]
    async fn test_estimate_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", ORIGIN_DESTINATION_PATH)
            .with_status(503)
            .create_async()
            .await;

        let result = client(server.url(), Some("secret"))
            .estimate(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0))
            .await;

        assert!(matches!(result, Err(TripCostError::ProviderUnavailable(_))));
    }

    #[tokio::test]
    async fn test_estimate_missing_costs() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", ORIGIN_DESTINATION_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"route": {}}"#)
            .create_async()
            .await;

        let result = client(server.url(), Some("secret"))
            .estimate(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0))
            .await;

        assert!(matches!(result, Err(TripCostError::ProviderResponseInvalid(_))));
    }

    #[tokio::test]
    async fn test_estimate_connection_refused() {
        let result = client("http://127.0.0.1:9".to_string(), Some("secret"))
            .estimate(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0))
            .await;

        assert!(matches!(result, Err(TripCostError::ProviderUnavailable(_))));
    }

    #[tokio::test]
    async fn test_estimate_without_api_key() {
        let result = client("http://127.0.0.1:9".to_string(), Some(""))
            .estimate(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0))
            .await;

        assert!(matches!(result, Err(TripCostError::NotConfigured(_))));
    }
}
