use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::models::domain::{Coordinate, NewLocation, SearchQuery};

/// How request bodies that fail to decode are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPolicy {
    /// Undecodable bodies and fields fall back to their zero values
    #[default]
    Lenient,
    /// Undecodable or invalid bodies are rejected
    Strict,
}

/// Errors produced while decoding a request body
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(#[from] ValidationErrors),
}

/// Decode a JSON request body under the given policy
///
/// Missing fields always take their zero value. Under `Lenient` a body that
/// is not valid JSON yields `T::default()`, a field that is `null` or of the
/// wrong type keeps its zero value while the other fields are kept, and
/// validation is skipped.
pub fn decode_request<T>(body: &[u8], policy: RequestPolicy) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Serialize + Default + Validate,
{
    match policy {
        RequestPolicy::Strict => {
            let request: T = serde_json::from_slice(body)?;
            request.validate()?;
            Ok(request)
        }
        RequestPolicy::Lenient => Ok(decode_lenient(body)),
    }
}

fn decode_lenient<T>(body: &[u8]) -> T
where
    T: DeserializeOwned + Serialize + Default,
{
    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            tracing::debug!("Ignoring non-object request body: {}", other);
            return T::default();
        }
        Err(e) => {
            tracing::debug!("Ignoring undecodable request body: {}", e);
            return T::default();
        }
    };

    let mut merged: Map<String, Value> = match serde_json::to_value(T::default()) {
        Ok(Value::Object(defaults)) => defaults,
        _ => return T::default(),
    };

    // Apply one field at a time and roll back any field that breaks decoding.
    for (key, value) in fields {
        let previous = merged.insert(key.clone(), value);
        if serde_json::from_value::<T>(Value::Object(merged.clone())).is_err() {
            tracing::debug!("Ignoring undecodable request field {:?}", key);
            match previous {
                Some(previous) => merged.insert(key, previous),
                None => merged.remove(&key),
            };
        }
    }

    serde_json::from_value(Value::Object(merged)).unwrap_or_default()
}

/// Request to store a new location
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateLocationRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub address: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(min = 1))]
    pub category: String,
}

impl From<CreateLocationRequest> for NewLocation {
    fn from(req: CreateLocationRequest) -> Self {
        NewLocation {
            name: req.name,
            address: req.address,
            latitude: req.latitude,
            longitude: req.longitude,
            category: req.category,
        }
    }
}

/// Radius search request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SearchRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub radius_km: f64,
}

impl From<SearchRequest> for SearchQuery {
    fn from(req: SearchRequest) -> Self {
        SearchQuery {
            origin: Coordinate::new(req.latitude, req.longitude),
            category: req.category,
            radius_km: req.radius_km,
        }
    }
}

/// Trip cost request carrying the caller's current position
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TripCostRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl TripCostRequest {
    pub fn origin(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
