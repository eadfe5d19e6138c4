// Itinerary optimization engine: clustering, day scheduling, route
// sequencing, budget estimation, and transport mode comparison for a
// trip-planning application. In-process library; the surrounding app owns
// all UI, storage, and network fallback policy.

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::EngineConfig;
pub use error::{EngineError, Result};

use crate::cache::{ComparisonCache, EstimateCache};
use crate::models::{
    BudgetEstimate, BudgetPreferences, Coordinates, Itinerary, Pace, Place, TransportComparison,
    TransportMode, TripParams,
};
use crate::services::budget::BudgetEstimator;
use crate::services::directions::DirectionsProvider;
use crate::services::itinerary::ItineraryBuilder;
use crate::services::transport::TransportAdvisor;
use std::sync::Arc;

/// The engine's produced surface, consumed by the UI and by the chat
/// assistant's itinerary-modification actions.
pub struct Engine {
    itinerary_builder: ItineraryBuilder,
    budget_estimator: BudgetEstimator,
    transport_advisor: TransportAdvisor,
}

impl Engine {
    pub fn new(config: EngineConfig, directions: Arc<dyn DirectionsProvider>) -> Self {
        let itinerary_builder = ItineraryBuilder::new(&config);
        let budget_estimator = BudgetEstimator::new(EstimateCache::new(
            config.budget_cache_ttl,
            config.cache_max_entries,
        ));
        let transport_advisor = TransportAdvisor::new(
            directions,
            ComparisonCache::new(config.directions_cache_ttl, config.cache_max_entries),
        )
        .with_heuristic_fallback();

        Engine {
            itinerary_builder,
            budget_estimator,
            transport_advisor,
        }
    }

    /// Cluster the selected places, distribute them across the trip's days,
    /// and produce a time-ordered itinerary.
    pub fn cluster_and_schedule(
        &self,
        destination: &str,
        places: Vec<Place>,
        trip_length_days: u32,
        pace: Pace,
    ) -> Itinerary {
        self.itinerary_builder
            .build(destination, places, trip_length_days, pace)
    }

    /// Tiered budget estimate for the trip; cached by input key.
    pub fn estimate_budget(
        &self,
        trip: &TripParams,
        preferences: &BudgetPreferences,
    ) -> Arc<BudgetEstimate> {
        self.budget_estimator.estimate(trip, preferences)
    }

    /// Compare travel modes between two points and recommend one.
    pub async fn compare_transport_modes(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        modes: &[TransportMode],
    ) -> Arc<TransportComparison> {
        self.transport_advisor
            .compare(origin, destination, modes)
            .await
    }
}
