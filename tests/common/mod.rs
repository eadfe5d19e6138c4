// Shared helpers; each integration test binary uses a subset.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tripweaver::error::{EngineError, Result};
use tripweaver::models::{Coordinates, Place, PlaceCategory, RouteResult, RouteStep, TransportMode};
use tripweaver::services::directions::DirectionsProvider;

/// Directions provider with canned per-mode outcomes. Modes without an
/// entry fail, mimicking a provider that does not serve that mode.
pub struct MockDirections {
    routes: HashMap<TransportMode, RouteResult>,
    calls: AtomicU64,
}

impl MockDirections {
    pub fn new() -> Self {
        MockDirections {
            routes: HashMap::new(),
            calls: AtomicU64::new(0),
        }
    }

    pub fn with_route(mut self, mode: TransportMode, distance_m: f64, duration_s: f64) -> Self {
        self.routes.insert(
            mode,
            RouteResult {
                duration_seconds: duration_s,
                distance_meters: distance_m,
                steps: vec![RouteStep {
                    instruction: format!("Follow the {} route", mode),
                    distance_meters: distance_m,
                    duration_seconds: duration_s,
                }],
                fare: None,
            },
        );
        self
    }

    pub fn with_fare(mut self, mode: TransportMode, fare: f64) -> Self {
        if let Some(route) = self.routes.get_mut(&mode) {
            route.fare = Some(fare);
        }
        self
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl DirectionsProvider for MockDirections {
    async fn route(
        &self,
        _origin: &Coordinates,
        _destination: &Coordinates,
        mode: TransportMode,
    ) -> Result<RouteResult> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.routes
            .get(&mode)
            .cloned()
            .ok_or_else(|| EngineError::DirectionsApi(format!("mode {} unavailable", mode)))
    }
}

pub fn place_at(id: &str, lat: f64, lng: f64, category: PlaceCategory) -> Place {
    Place::new(
        id,
        format!("Place {}", id),
        Coordinates::new(lat, lng).unwrap(),
        vec![category],
    )
}
