use crate::models::{CityTier, CostLevel};

/// Tier-1 destinations: expensive cities. Matched case-insensitively as a
/// substring of the destination ("Paris, France" matches "paris").
const TIER_1_CITIES: &[&str] = &[
    "paris",
    "london",
    "new york",
    "tokyo",
    "zurich",
    "geneva",
    "singapore",
    "dubai",
    "san francisco",
    "sydney",
    "copenhagen",
    "amsterdam",
    "hong kong",
    "oslo",
    "reykjavik",
    "venice",
];

/// Tier-2 destinations: moderate cost.
const TIER_2_CITIES: &[&str] = &[
    "barcelona",
    "madrid",
    "berlin",
    "munich",
    "rome",
    "milan",
    "lisbon",
    "prague",
    "vienna",
    "dublin",
    "seoul",
    "osaka",
    "toronto",
    "montreal",
    "melbourne",
    "chicago",
    "athens",
    "edinburgh",
];

/// Classify a destination into a cost tier. Unmatched destinations default
/// to tier 3 (budget-friendly), which also drops the estimate's
/// known-destination confidence bonus.
pub fn tier_for_destination(destination: &str) -> CityTier {
    let needle = destination.to_lowercase();
    if TIER_1_CITIES.iter().any(|city| needle.contains(city)) {
        CityTier::Expensive
    } else if TIER_2_CITIES.iter().any(|city| needle.contains(city)) {
        CityTier::Moderate
    } else {
        CityTier::BudgetFriendly
    }
}

/// Per-unit rate by cost level.
#[derive(Debug, Clone, Copy)]
pub struct RateByLevel {
    pub budget: f64,
    pub moderate: f64,
    pub luxury: f64,
}

impl RateByLevel {
    pub fn for_level(&self, level: CostLevel) -> f64 {
        match level {
            CostLevel::Budget => self.budget,
            CostLevel::Moderate => self.moderate,
            CostLevel::Luxury => self.luxury,
        }
    }
}

/// Fixed per-unit costs carried by a city tier.
#[derive(Debug, Clone, Copy)]
pub struct TierRates {
    /// Per room-night.
    pub accommodation: RateByLevel,
    /// Per person-night, before the dining-style multiplier.
    pub food: RateByLevel,
    /// Daily flat rate for getting around (public transit baseline).
    pub transport_daily: f64,
    /// Single-ride rate (taxi or metro ticket scale).
    pub transport_per_ride: f64,
    /// Per-place activity rates by price bucket; the free bucket costs 0.
    pub activity_budget: f64,
    pub activity_moderate: f64,
    pub activity_premium: f64,
    /// Incidentals, per traveler per day.
    pub incidentals_daily: f64,
    /// One airport transfer per traveler.
    pub airport_transfer: f64,
}

const TIER_1_RATES: TierRates = TierRates {
    accommodation: RateByLevel {
        budget: 80.0,
        moderate: 150.0,
        luxury: 350.0,
    },
    food: RateByLevel {
        budget: 40.0,
        moderate: 70.0,
        luxury: 150.0,
    },
    transport_daily: 20.0,
    transport_per_ride: 12.0,
    activity_budget: 15.0,
    activity_moderate: 35.0,
    activity_premium: 75.0,
    incidentals_daily: 30.0,
    airport_transfer: 60.0,
};

const TIER_2_RATES: TierRates = TierRates {
    accommodation: RateByLevel {
        budget: 50.0,
        moderate: 100.0,
        luxury: 220.0,
    },
    food: RateByLevel {
        budget: 25.0,
        moderate: 45.0,
        luxury: 100.0,
    },
    transport_daily: 12.0,
    transport_per_ride: 8.0,
    activity_budget: 10.0,
    activity_moderate: 25.0,
    activity_premium: 50.0,
    incidentals_daily: 20.0,
    airport_transfer: 40.0,
};

const TIER_3_RATES: TierRates = TierRates {
    accommodation: RateByLevel {
        budget: 30.0,
        moderate: 60.0,
        luxury: 140.0,
    },
    food: RateByLevel {
        budget: 15.0,
        moderate: 30.0,
        luxury: 65.0,
    },
    transport_daily: 6.0,
    transport_per_ride: 5.0,
    activity_budget: 5.0,
    activity_moderate: 15.0,
    activity_premium: 30.0,
    incidentals_daily: 12.0,
    airport_transfer: 25.0,
};

pub fn rates_for(tier: CityTier) -> &'static TierRates {
    match tier {
        CityTier::Expensive => &TIER_1_RATES,
        CityTier::Moderate => &TIER_2_RATES,
        CityTier::BudgetFriendly => &TIER_3_RATES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_lookup_is_case_insensitive_and_substring_based() {
        assert_eq!(tier_for_destination("Paris, France"), CityTier::Expensive);
        assert_eq!(tier_for_destination("TOKYO"), CityTier::Expensive);
        assert_eq!(tier_for_destination("Lisbon"), CityTier::Moderate);
        assert_eq!(
            tier_for_destination("Chiang Mai, Thailand"),
            CityTier::BudgetFriendly
        );
    }

    #[test]
    fn tier_one_moderate_rates_match_cost_model() {
        let rates = rates_for(CityTier::Expensive);
        assert_eq!(rates.accommodation.for_level(CostLevel::Moderate), 150.0);
        assert_eq!(rates.food.for_level(CostLevel::Moderate), 70.0);
    }

    #[test]
    fn rates_decrease_with_tier() {
        let t1 = rates_for(CityTier::Expensive);
        let t2 = rates_for(CityTier::Moderate);
        let t3 = rates_for(CityTier::BudgetFriendly);
        assert!(t1.accommodation.moderate > t2.accommodation.moderate);
        assert!(t2.accommodation.moderate > t3.accommodation.moderate);
        assert!(t1.incidentals_daily > t3.incidentals_daily);
    }
}
