use crate::constants::*;
use crate::models::{Coordinates, ModeOutcome, RouteResult, RouteStep, TransportMode};
use crate::services::directions::DirectionsProvider;
use async_trait::async_trait;
use std::sync::Arc;

/// One way of obtaining a route for a mode. Strategies form an explicit
/// ordered fallback chain with a uniform outcome type; the first success
/// wins, so the chain order is the fallback order.
#[async_trait]
pub trait RouteStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        mode: TransportMode,
    ) -> ModeOutcome;
}

/// Try strategies in order until one succeeds. All strategies failing
/// yields `Unavailable` with the last reason, never an error.
pub async fn resolve_route(
    strategies: &[Box<dyn RouteStrategy>],
    origin: &Coordinates,
    destination: &Coordinates,
    mode: TransportMode,
) -> ModeOutcome {
    let mut last_reason = "no route strategies configured".to_string();

    for strategy in strategies {
        match strategy.fetch(origin, destination, mode).await {
            ModeOutcome::Success(route) => {
                tracing::debug!(
                    strategy = strategy.name(),
                    mode = %mode,
                    "Route resolved by '{}' strategy for {}",
                    strategy.name(),
                    mode
                );
                return ModeOutcome::Success(route);
            }
            ModeOutcome::Unavailable { reason } => {
                tracing::debug!(
                    strategy = strategy.name(),
                    mode = %mode,
                    "Route strategy '{}' unavailable for {}: {}",
                    strategy.name(),
                    mode,
                    reason
                );
                last_reason = reason;
            }
        }
    }

    ModeOutcome::Unavailable {
        reason: last_reason,
    }
}

/// Queries the Directions Provider; any provider error becomes an
/// `Unavailable` outcome for that mode alone.
pub struct ProviderStrategy {
    provider: Arc<dyn DirectionsProvider>,
}

impl ProviderStrategy {
    pub fn new(provider: Arc<dyn DirectionsProvider>) -> Self {
        ProviderStrategy { provider }
    }
}

#[async_trait]
impl RouteStrategy for ProviderStrategy {
    fn name(&self) -> &'static str {
        "provider"
    }

    async fn fetch(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        mode: TransportMode,
    ) -> ModeOutcome {
        match self.provider.route(origin, destination, mode).await {
            Ok(route) => ModeOutcome::Success(route),
            Err(e) => {
                tracing::warn!(mode = %mode, error = %e, "Directions provider failed for {}", mode);
                ModeOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Straight-line estimate at a fixed per-mode speed. Always succeeds, so
/// it only belongs at the end of the chain.
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    fn speed_kmh(mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Walking => HEURISTIC_SPEED_WALKING_KMH,
            TransportMode::Bicycling => HEURISTIC_SPEED_BICYCLING_KMH,
            TransportMode::Transit => HEURISTIC_SPEED_TRANSIT_KMH,
            TransportMode::Driving => HEURISTIC_SPEED_DRIVING_KMH,
        }
    }
}

#[async_trait]
impl RouteStrategy for HeuristicStrategy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn fetch(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        mode: TransportMode,
    ) -> ModeOutcome {
        let distance_km = origin.distance_to(destination);
        let duration_seconds = distance_km / Self::speed_kmh(mode) * 3600.0;

        ModeOutcome::Success(RouteResult {
            duration_seconds,
            distance_meters: distance_km * 1000.0,
            steps: vec![RouteStep {
                instruction: "Head toward the destination (straight-line estimate)".to_string(),
                distance_meters: distance_km * 1000.0,
                duration_seconds,
            }],
            fare: None,
        })
    }
}
