pub mod recommendations;
pub mod tiers;

use crate::cache::{budget_cache_key, CacheStats, EstimateCache};
use crate::constants::*;
use crate::models::{
    AccommodationEstimate, ActivitiesEstimate, AlignmentStatus, BudgetAlignment, BudgetBreakdown,
    BudgetEstimate, BudgetPreferences, FoodEstimate, MiscellaneousEstimate, TransportStyle,
    TransportationEstimate, TripParams,
};
use std::sync::Arc;

use recommendations::build_recommendations;
use tiers::{rates_for, tier_for_destination};

/// Tiered budget estimator with a constructor-injected estimate cache.
/// Estimation itself is a pure function of its inputs; the cache only
/// avoids recomputation for repeated queries.
pub struct BudgetEstimator {
    cache: EstimateCache,
}

impl BudgetEstimator {
    pub fn new(cache: EstimateCache) -> Self {
        BudgetEstimator { cache }
    }

    pub fn estimate(
        &self,
        trip: &TripParams,
        preferences: &BudgetPreferences,
    ) -> Arc<BudgetEstimate> {
        let key = budget_cache_key(trip, preferences);
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }
        let estimate = compute_estimate(trip, preferences);
        self.cache.insert(&key, estimate)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

/// Compute a tiered budget estimate. Never fails: every missing preference
/// has a default and only lowers the confidence.
pub fn compute_estimate(trip: &TripParams, preferences: &BudgetPreferences) -> BudgetEstimate {
    let tier = tier_for_destination(&trip.destination);
    let rates = rates_for(tier);

    let travelers = trip.travelers.max(1);
    let nights = trip.nights;
    let paid_days = nights.max(1);

    // Accommodation: two travelers share a room.
    let rooms = (travelers + 1) / 2;
    let nightly_rate = rates
        .accommodation
        .for_level(preferences.accommodation.unwrap_or_default());
    let accommodation_total = nightly_rate * nights as f64 * rooms as f64;
    let accommodation = AccommodationEstimate {
        total: round2(accommodation_total),
        nightly_rate,
        nights,
        rooms,
    };

    // Food: per-person nightly rate scaled by dining style, split across meals.
    let food_rate = rates.food.for_level(preferences.food.unwrap_or_default())
        * preferences.dining_style.multiplier();
    let food_total = food_rate * nights as f64 * travelers as f64;
    let food = FoodEstimate {
        total: round2(food_total),
        breakfast: round2(food_total * FOOD_SPLIT_BREAKFAST),
        lunch: round2(food_total * FOOD_SPLIT_LUNCH),
        dinner: round2(food_total * FOOD_SPLIT_DINNER),
    };

    // Transportation: daily getting-around cost by preferred style, plus
    // hops between attractions, plus one airport transfer per traveler.
    let daily_rate = match preferences.transport {
        TransportStyle::Walking => rates.transport_daily * WALKING_TRANSPORT_MULTIPLIER,
        TransportStyle::PublicTransit => rates.transport_daily,
        TransportStyle::Taxi => rates.transport_per_ride * TAXI_RIDES_PER_DAY,
        TransportStyle::RentalCar => RENTAL_CAR_DAILY_RATE,
    };
    let places_per_day = trip.places.len() as f64 / paid_days as f64;
    let hop_daily = places_per_day * ATTRACTION_HOP_RATE;
    let daily_getting_around = daily_rate * nights as f64 * travelers as f64;
    let inter_attraction = hop_daily * nights as f64 * travelers as f64;
    let airport_transfers = rates.airport_transfer * travelers as f64;
    let transportation_total = daily_getting_around + inter_attraction + airport_transfers;
    let transportation = TransportationEstimate {
        total: round2(transportation_total),
        daily_getting_around: round2(daily_getting_around),
        inter_attraction: round2(inter_attraction),
        airport_transfers: round2(airport_transfers),
    };

    // Activities: bucket each place by price level and sum at tier rates.
    let mut free_count = 0;
    let mut budget_count = 0;
    let mut moderate_count = 0;
    let mut premium_count = 0;
    for place in &trip.places {
        match place.price_level.unwrap_or(0) {
            0 => free_count += 1,
            1 => budget_count += 1,
            2 => moderate_count += 1,
            _ => premium_count += 1,
        }
    }
    let activities_total = (budget_count as f64 * rates.activity_budget
        + moderate_count as f64 * rates.activity_moderate
        + premium_count as f64 * rates.activity_premium)
        * travelers as f64;
    let activities = ActivitiesEstimate {
        total: round2(activities_total),
        free_count,
        budget_count,
        moderate_count,
        premium_count,
    };

    // Incidentals: flat per-traveler-per-day rate.
    let misc_total = rates.incidentals_daily * travelers as f64 * nights as f64;
    let miscellaneous = MiscellaneousEstimate {
        total: round2(misc_total),
        shopping: round2(misc_total * MISC_SPLIT_SHOPPING),
        tips: round2(misc_total * MISC_SPLIT_TIPS),
        emergency: round2(misc_total * MISC_SPLIT_EMERGENCY),
        souvenirs: round2(misc_total * MISC_SPLIT_SOUVENIRS),
    };

    let total = round2(
        accommodation_total + food_total + transportation_total + activities_total + misc_total,
    );

    let breakdown = BudgetBreakdown {
        accommodation,
        food,
        transportation,
        activities,
        miscellaneous,
    };

    let confidence = confidence_for(trip, preferences, tier);
    let budget_alignment = alignment_for(total, preferences.target_budget);
    let recommendations = build_recommendations(preferences, &breakdown, tier);

    tracing::debug!(
        destination = %trip.destination,
        tier = %tier,
        total = total,
        confidence = confidence,
        "Budget estimate: {} total {:.2} (confidence {:.2})",
        trip.destination,
        total,
        confidence
    );

    BudgetEstimate {
        total,
        per_person: round2(total / travelers as f64),
        per_day: round2(total / paid_days as f64),
        confidence,
        breakdown,
        budget_alignment,
        recommendations,
        city_tier: tier,
    }
}

fn confidence_for(
    trip: &TripParams,
    preferences: &BudgetPreferences,
    tier: crate::models::CityTier,
) -> f64 {
    let mut confidence = BUDGET_CONFIDENCE_BASE;
    if tier != crate::models::CityTier::BudgetFriendly {
        // Destination matched a curated list; the rates are grounded.
        confidence += 0.1;
    }
    if trip.nights > 0 {
        confidence += 0.1;
    }
    if !trip.places.is_empty() {
        confidence += 0.1;
    }
    if preferences.accommodation.is_some() {
        confidence += 0.05;
    }
    if preferences.food.is_some() {
        confidence += 0.05;
    }
    confidence.min(CONFIDENCE_CAP)
}

fn alignment_for(total: f64, target: Option<f64>) -> BudgetAlignment {
    let Some(target) = target else {
        return BudgetAlignment {
            status: AlignmentStatus::Unknown,
            message: "No target budget provided; estimate stands on its own".to_string(),
            difference: None,
            percent: None,
        };
    };

    let difference = total - target;
    let percent = if target > 0.0 {
        (difference / target) * 100.0
    } else {
        0.0
    };

    let (status, message) = if total < target * (1.0 - BUDGET_ALIGNMENT_TOLERANCE_PCT) {
        (
            AlignmentStatus::UnderBudget,
            format!(
                "Estimate is {:.0} under your target ({:.0}% below)",
                -difference, -percent
            ),
        )
    } else if total > target * (1.0 + BUDGET_ALIGNMENT_TOLERANCE_PCT) {
        (
            AlignmentStatus::OverBudget,
            format!(
                "Estimate is {:.0} over your target ({:.0}% above)",
                difference, percent
            ),
        )
    } else {
        (
            AlignmentStatus::OnBudget,
            "Estimate is within 20% of your target".to_string(),
        )
    };

    BudgetAlignment {
        status,
        message,
        difference: Some(round2(difference)),
        percent: Some(round2(percent)),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
