pub mod memory;

pub use memory::{CacheStats, ComparisonCache, EstimateCache};

use crate::models::{BudgetPreferences, Coordinates, TransportMode, TripParams};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Cache key for a budget estimate.
/// Key includes: destination (lowercased), nights, travelers, place count,
/// and every preference field that changes the estimate.
pub fn budget_cache_key(trip: &TripParams, preferences: &BudgetPreferences) -> String {
    let mut hasher = DefaultHasher::new();

    trip.destination.to_lowercase().hash(&mut hasher);
    trip.nights.hash(&mut hasher);
    trip.travelers.hash(&mut hasher);
    trip.places.len().hash(&mut hasher);
    // Price levels affect the activities bucket sums.
    for place in &trip.places {
        place.price_level.unwrap_or(0).hash(&mut hasher);
    }

    format!("{:?}", preferences.accommodation).hash(&mut hasher);
    format!("{:?}", preferences.food).hash(&mut hasher);
    format!("{:?}", preferences.dining_style).hash(&mut hasher);
    format!("{:?}", preferences.transport).hash(&mut hasher);
    preferences
        .target_budget
        .map(|t| (t * 100.0).round() as i64)
        .hash(&mut hasher);

    format!("budget:{:x}", hasher.finish())
}

/// Cache key for a transport comparison.
/// Coordinates are rounded to 3 decimal places (~100m precision) so nearby
/// queries share an entry; modes are sorted for order independence.
pub fn comparison_cache_key(
    origin: &Coordinates,
    destination: &Coordinates,
    modes: &[TransportMode],
) -> String {
    let mut hasher = DefaultHasher::new();

    let origin = origin.round(3);
    let destination = destination.round(3);
    ((origin.lat * 1000.0).round() as i64).hash(&mut hasher);
    ((origin.lng * 1000.0).round() as i64).hash(&mut hasher);
    ((destination.lat * 1000.0).round() as i64).hash(&mut hasher);
    ((destination.lng * 1000.0).round() as i64).hash(&mut hasher);

    let mut profiles: Vec<&str> = modes.iter().map(|m| m.profile()).collect();
    profiles.sort();
    profiles.hash(&mut hasher);

    format!("transport:{:x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> TripParams {
        TripParams {
            destination: "Paris".to_string(),
            nights: 3,
            travelers: 2,
            places: vec![],
        }
    }

    #[test]
    fn budget_key_is_stable() {
        let prefs = BudgetPreferences::default();
        assert_eq!(
            budget_cache_key(&trip(), &prefs),
            budget_cache_key(&trip(), &prefs)
        );
    }

    #[test]
    fn budget_key_ignores_destination_case() {
        let prefs = BudgetPreferences::default();
        let mut shouty = trip();
        shouty.destination = "PARIS".to_string();
        assert_eq!(
            budget_cache_key(&trip(), &prefs),
            budget_cache_key(&shouty, &prefs)
        );
    }

    #[test]
    fn budget_key_changes_with_preferences() {
        let base = BudgetPreferences::default();
        let mut taxi = BudgetPreferences::default();
        taxi.transport = crate::models::TransportStyle::Taxi;
        assert_ne!(
            budget_cache_key(&trip(), &base),
            budget_cache_key(&trip(), &taxi)
        );
    }

    #[test]
    fn comparison_key_tolerates_small_coordinate_jitter() {
        // ~11m apart: same rounded bucket.
        let a = Coordinates::new(48.8566, 2.3522).unwrap();
        let b = Coordinates::new(48.8567, 2.3523).unwrap();
        let dest = Coordinates::new(48.8606, 2.3376).unwrap();
        let modes = [TransportMode::Walking, TransportMode::Driving];

        assert_eq!(
            comparison_cache_key(&a, &dest, &modes),
            comparison_cache_key(&b, &dest, &modes)
        );
    }

    #[test]
    fn comparison_key_is_mode_order_independent() {
        let a = Coordinates::new(48.8566, 2.3522).unwrap();
        let dest = Coordinates::new(48.8606, 2.3376).unwrap();

        assert_eq!(
            comparison_cache_key(&a, &dest, &[TransportMode::Walking, TransportMode::Driving]),
            comparison_cache_key(&a, &dest, &[TransportMode::Driving, TransportMode::Walking])
        );
    }
}
