use crate::error::{EngineError, Result};
use crate::models::{Coordinates, RouteResult, RouteStep, TransportMode};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Seam to the external Directions Provider. The engine ships one HTTP
/// client; callers may inject their own implementation (or a mock).
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn route(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        mode: TransportMode,
    ) -> Result<RouteResult>;
}

const DIRECTIONS_DEFAULT_BASE_URL: &str = "https://api.directions.example.com/v1/routes";

/// How the client authenticates with the directions API.
#[derive(Clone, Debug)]
pub enum AuthMode {
    /// Send `access_token` query param (direct API access).
    DirectToken,
    /// Proxy mode: send `Authorization: Bearer` header.
    BearerHeader,
}

/// HTTP client for the Directions Provider.
#[derive(Clone)]
pub struct DirectionsClient {
    client: Client,
    api_key: String,
    base_url: String,
    auth_mode: AuthMode,
}

impl DirectionsClient {
    pub fn new(api_key: String) -> Self {
        DirectionsClient {
            client: Client::new(),
            api_key,
            base_url: DIRECTIONS_DEFAULT_BASE_URL.to_string(),
            auth_mode: AuthMode::DirectToken,
        }
    }

    pub fn with_config(api_key: String, base_url: String, auth_mode: AuthMode) -> Self {
        DirectionsClient {
            client: Client::new(),
            api_key,
            base_url,
            auth_mode,
        }
    }
}

#[async_trait]
impl DirectionsProvider for DirectionsClient {
    async fn route(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        mode: TransportMode,
    ) -> Result<RouteResult> {
        // Coordinates as "lng,lat;lng,lat"
        let coordinates_str = format!(
            "{},{};{},{}",
            origin.lng, origin.lat, destination.lng, destination.lat
        );
        let url = format!("{}/{}/{}", self.base_url, mode.profile(), coordinates_str);

        tracing::debug!(
            mode = %mode,
            "Directions API request: profile {}",
            mode.profile()
        );

        let mut request = self.client.get(&url).query(&[("steps", "true")]);

        match self.auth_mode {
            AuthMode::DirectToken => {
                request = request.query(&[("access_token", &self.api_key)]);
            }
            AuthMode::BearerHeader => {
                request = request.bearer_auth(&self.api_key);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| EngineError::DirectionsApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                mode = %mode,
                "Directions API HTTP error {}: {}",
                status, error_text
            );
            return Err(EngineError::DirectionsApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let directions: DirectionsApiResponse = response
            .json()
            .await
            .map_err(|e| EngineError::DirectionsApi(format!("Failed to parse response: {}", e)))?;

        let Some(route) = directions.routes.first() else {
            tracing::warn!(mode = %mode, "Directions API returned 0 routes for {}", mode);
            return Err(EngineError::DirectionsApi("No routes found".to_string()));
        };

        let steps = route
            .legs
            .iter()
            .flat_map(|leg| &leg.steps)
            .map(|step| RouteStep {
                instruction: step.maneuver.instruction.clone(),
                distance_meters: step.distance,
                duration_seconds: step.duration,
            })
            .collect();

        tracing::debug!(
            distance_km = %format!("{:.2}", route.distance / 1000.0),
            duration_min = %format!("{:.0}", route.duration / 60.0),
            mode = %mode,
            "Directions response: {:.2}km, {:.0}min via {}",
            route.distance / 1000.0, route.duration / 60.0, mode
        );

        Ok(RouteResult {
            duration_seconds: route.duration,
            distance_meters: route.distance,
            steps,
            fare: route.fare,
        })
    }
}

// Directions API response types

#[derive(Debug, Deserialize)]
struct DirectionsApiResponse {
    routes: Vec<ApiRoute>,
}

#[derive(Debug, Deserialize)]
struct ApiRoute {
    distance: f64, // meters
    duration: f64, // seconds
    #[serde(default)]
    legs: Vec<ApiLeg>,
    /// Transit fare, when the provider reports one.
    fare: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ApiLeg {
    #[serde(default)]
    steps: Vec<ApiStep>,
}

#[derive(Debug, Deserialize)]
struct ApiStep {
    distance: f64,
    duration: f64,
    maneuver: ApiManeuver,
}

#[derive(Debug, Deserialize)]
struct ApiManeuver {
    instruction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_direct_token() {
        let client = DirectionsClient::new("key123".to_string());
        assert_eq!(client.base_url, DIRECTIONS_DEFAULT_BASE_URL);
        assert!(matches!(client.auth_mode, AuthMode::DirectToken));
    }

    #[test]
    fn test_with_config_bearer_mode() {
        let client = DirectionsClient::with_config(
            "my-key".to_string(),
            "http://localhost:4000/v1/routes".to_string(),
            AuthMode::BearerHeader,
        );
        assert_eq!(client.base_url, "http://localhost:4000/v1/routes");
        assert!(matches!(client.auth_mode, AuthMode::BearerHeader));
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "routes": [{
                "distance": 820.0,
                "duration": 610.0,
                "legs": [{
                    "steps": [{
                        "distance": 820.0,
                        "duration": 610.0,
                        "maneuver": { "instruction": "Head north on Rue de Rivoli" }
                    }]
                }]
            }]
        }"#;
        let parsed: DirectionsApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.routes.len(), 1);
        assert_eq!(parsed.routes[0].legs[0].steps.len(), 1);
        assert!(parsed.routes[0].fare.is_none());
    }
}
