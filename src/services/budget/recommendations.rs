use crate::models::{
    BudgetBreakdown, BudgetPreferences, BudgetRecommendation, CityTier, CostLevel, TransportStyle,
};

/// Rule-based cost-saving and upgrade suggestions derived from the
/// preferences and the computed breakdown. Savings are rough fractions of
/// the affected category, not quotes.
pub fn build_recommendations(
    preferences: &BudgetPreferences,
    breakdown: &BudgetBreakdown,
    tier: CityTier,
) -> Vec<BudgetRecommendation> {
    let mut recommendations = Vec::new();

    if preferences.accommodation == Some(CostLevel::Luxury) {
        recommendations.push(BudgetRecommendation {
            category: "accommodation".to_string(),
            suggestion: "Moderate accommodation in well-rated neighborhoods offers most of the comfort at a lower rate".to_string(),
            estimated_savings: round2(breakdown.accommodation.total * 0.15),
        });
    }

    if preferences.food == Some(CostLevel::Luxury) {
        recommendations.push(BudgetRecommendation {
            category: "food".to_string(),
            suggestion: "Mixing in local eateries and markets alongside fine dining trims the food budget noticeably".to_string(),
            estimated_savings: round2(breakdown.food.total * 0.12),
        });
    }

    if preferences.transport == TransportStyle::Taxi {
        recommendations.push(BudgetRecommendation {
            category: "transportation".to_string(),
            suggestion: "Public transport covers most routes here; switching from taxis saves on daily getting-around costs".to_string(),
            estimated_savings: round2(breakdown.transportation.total * 0.08),
        });
    }

    // Upgrade note: budget lodging in an expensive city tends to mean long
    // commutes to the center; flag the trade-off with its added cost.
    if tier == CityTier::Expensive && preferences.accommodation == Some(CostLevel::Budget) {
        recommendations.push(BudgetRecommendation {
            category: "accommodation".to_string(),
            suggestion: "Budget stays in this city are usually far from the center; a moderate, central option saves transit time".to_string(),
            estimated_savings: round2(-breakdown.accommodation.total * 0.20),
        });
    }

    recommendations
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AccommodationEstimate, ActivitiesEstimate, FoodEstimate, MiscellaneousEstimate,
        TransportationEstimate,
    };

    fn breakdown() -> BudgetBreakdown {
        BudgetBreakdown {
            accommodation: AccommodationEstimate {
                total: 1000.0,
                nightly_rate: 350.0,
                nights: 3,
                rooms: 1,
            },
            food: FoodEstimate {
                total: 500.0,
                breakfast: 125.0,
                lunch: 175.0,
                dinner: 200.0,
            },
            transportation: TransportationEstimate {
                total: 400.0,
                daily_getting_around: 300.0,
                inter_attraction: 40.0,
                airport_transfers: 60.0,
            },
            activities: ActivitiesEstimate {
                total: 0.0,
                free_count: 0,
                budget_count: 0,
                moderate_count: 0,
                premium_count: 0,
            },
            miscellaneous: MiscellaneousEstimate {
                total: 0.0,
                shopping: 0.0,
                tips: 0.0,
                emergency: 0.0,
                souvenirs: 0.0,
            },
        }
    }

    #[test]
    fn luxury_choices_yield_saving_suggestions() {
        let prefs = BudgetPreferences {
            accommodation: Some(CostLevel::Luxury),
            food: Some(CostLevel::Luxury),
            transport: TransportStyle::Taxi,
            ..Default::default()
        };
        let recs = build_recommendations(&prefs, &breakdown(), CityTier::Moderate);

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].estimated_savings, 150.0); // 15% of accommodation
        assert_eq!(recs[1].estimated_savings, 60.0); // 12% of food
        assert_eq!(recs[2].estimated_savings, 32.0); // 8% of transportation
    }

    #[test]
    fn budget_lodging_in_expensive_city_suggests_upgrade() {
        let prefs = BudgetPreferences {
            accommodation: Some(CostLevel::Budget),
            ..Default::default()
        };
        let recs = build_recommendations(&prefs, &breakdown(), CityTier::Expensive);

        assert_eq!(recs.len(), 1);
        // Upgrades carry a negative "saving" (an added cost).
        assert!(recs[0].estimated_savings < 0.0);
    }

    #[test]
    fn default_preferences_yield_no_recommendations() {
        let recs = build_recommendations(
            &BudgetPreferences::default(),
            &breakdown(),
            CityTier::BudgetFriendly,
        );
        assert!(recs.is_empty());
    }
}
