pub mod scheduling;
pub mod sequencing;
pub mod timing;

use crate::config::EngineConfig;
use crate::models::{
    BudgetPreferences, DayPlan, Itinerary, ItineraryMetadata, Pace, Place, TripParams,
};
use crate::services::budget;
use crate::services::clustering::cluster_places;
use time::OffsetDateTime;
use uuid::Uuid;

/// Turns a destination and an unordered set of selected places into a
/// day-by-day, time-ordered plan: cluster, distribute across days, order
/// each day with nearest-neighbor, then pin time blocks and durations.
/// Pure and synchronous; each call produces a fresh itinerary.
pub struct ItineraryBuilder {
    cluster_radius_km: f64,
}

impl ItineraryBuilder {
    pub fn new(config: &EngineConfig) -> Self {
        ItineraryBuilder {
            cluster_radius_km: config.cluster_radius_km,
        }
    }

    pub fn build(
        &self,
        destination: &str,
        places: Vec<Place>,
        trip_length_days: u32,
        pace: Pace,
    ) -> Itinerary {
        let total_places = places.len();

        // Rough whole-trip budget for the metadata block, computed with
        // default preferences for a single traveler.
        let estimated_budget = budget::compute_estimate(
            &TripParams {
                destination: destination.to_string(),
                nights: trip_length_days,
                travelers: 1,
                places: places.clone(),
            },
            &BudgetPreferences::default(),
        )
        .total;

        let clusters = cluster_places(&places, self.cluster_radius_km);
        let day_buckets = scheduling::distribute(clusters, trip_length_days, pace);
        let day_count = day_buckets.len();

        let days: Vec<DayPlan> = day_buckets
            .into_iter()
            .enumerate()
            .map(|(i, bucket)| {
                let ordered = sequencing::nearest_neighbor_order(bucket);
                let theme = scheduling::derive_theme(&ordered);
                DayPlan {
                    day: (i + 1) as u32,
                    theme,
                    places: timing::assign_time_blocks(ordered),
                }
            })
            .collect();

        tracing::info!(
            destination = %destination,
            places = total_places,
            days = day_count,
            pace = %pace,
            "Built itinerary: {} places over {} days at {} pace",
            total_places,
            day_count,
            pace
        );

        Itinerary {
            id: Uuid::new_v4(),
            destination: destination.to_string(),
            trip_length_days: day_count as u32,
            days,
            metadata: ItineraryMetadata {
                total_places,
                average_places_per_day: total_places as f64 / day_count as f64,
                estimated_budget,
                generated_at: OffsetDateTime::now_utc(),
            },
        }
    }
}
