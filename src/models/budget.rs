use crate::models::Place;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete cost bracket assigned to a destination for cost modeling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CityTier {
    /// Tier 1: expensive destinations (Paris, Tokyo, ...).
    Expensive,
    /// Tier 2: moderate destinations.
    Moderate,
    /// Tier 3: everything unmatched.
    BudgetFriendly,
}

impl fmt::Display for CityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityTier::Expensive => write!(f, "expensive"),
            CityTier::Moderate => write!(f, "moderate"),
            CityTier::BudgetFriendly => write!(f, "budget-friendly"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CostLevel {
    Budget,
    #[default]
    Moderate,
    Luxury,
}

impl FromStr for CostLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" => Ok(CostLevel::Budget),
            "moderate" | "mid" | "midrange" => Ok(CostLevel::Moderate),
            "luxury" => Ok(CostLevel::Luxury),
            _ => Err(format!("Invalid cost level: '{}'", s)),
        }
    }
}

/// Dining style scales the food budget between street food and fine dining.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiningStyle {
    StreetFood,
    Casual,
    #[default]
    Mixed,
    Upscale,
    FineDining,
}

impl DiningStyle {
    /// Multiplier applied to the tier's per-person food rate (0.5-1.5).
    pub fn multiplier(&self) -> f64 {
        match self {
            DiningStyle::StreetFood => 0.5,
            DiningStyle::Casual => 0.8,
            DiningStyle::Mixed => 1.0,
            DiningStyle::Upscale => 1.3,
            DiningStyle::FineDining => 1.5,
        }
    }
}

/// How the traveler intends to get around within the destination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransportStyle {
    Walking,
    #[default]
    PublicTransit,
    Taxi,
    RentalCar,
}

/// Raw trip parameters consumed by the budget estimator. `places` may be
/// empty; an empty list only lowers the estimate's confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripParams {
    pub destination: String,
    pub nights: u32,
    pub travelers: u32,
    #[serde(default)]
    pub places: Vec<Place>,
}

/// Caller preferences. Every field has a default; missing preferences
/// degrade confidence, never fail the estimate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<CostLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<CostLevel>,
    #[serde(default)]
    pub dining_style: DiningStyle,
    #[serde(default)]
    pub transport: TransportStyle,
    /// Target total the caller wants to stay within, used for alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_budget: Option<f64>,
}

// --- Breakdown categories ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccommodationEstimate {
    pub total: f64,
    pub nightly_rate: f64,
    pub nights: u32,
    /// Two travelers share a room.
    pub rooms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEstimate {
    pub total: f64,
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportationEstimate {
    pub total: f64,
    pub daily_getting_around: f64,
    pub inter_attraction: f64,
    pub airport_transfers: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitiesEstimate {
    pub total: f64,
    pub free_count: usize,
    pub budget_count: usize,
    pub moderate_count: usize,
    pub premium_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiscellaneousEstimate {
    pub total: f64,
    pub shopping: f64,
    pub tips: f64,
    pub emergency: f64,
    pub souvenirs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub accommodation: AccommodationEstimate,
    pub food: FoodEstimate,
    pub transportation: TransportationEstimate,
    pub activities: ActivitiesEstimate,
    pub miscellaneous: MiscellaneousEstimate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentStatus {
    UnderBudget,
    OnBudget,
    OverBudget,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAlignment {
    pub status: AlignmentStatus,
    pub message: String,
    /// Absolute difference estimate - target, when a target was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
    /// Difference as a percentage of the target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRecommendation {
    pub category: String,
    pub suggestion: String,
    /// Positive = estimated saving, negative = added cost.
    pub estimated_savings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetEstimate {
    pub total: f64,
    pub per_person: f64,
    pub per_day: f64,
    /// 0.0-0.95; degraded by missing inputs, never a failure.
    pub confidence: f64,
    pub breakdown: BudgetBreakdown,
    pub budget_alignment: BudgetAlignment,
    pub recommendations: Vec<BudgetRecommendation>,
    pub city_tier: CityTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dining_style_multiplier_bounds() {
        assert_eq!(DiningStyle::StreetFood.multiplier(), 0.5);
        assert_eq!(DiningStyle::Mixed.multiplier(), 1.0);
        assert_eq!(DiningStyle::FineDining.multiplier(), 1.5);
    }

    #[test]
    fn test_cost_level_parsing() {
        assert_eq!("budget".parse::<CostLevel>().unwrap(), CostLevel::Budget);
        assert_eq!("LUXURY".parse::<CostLevel>().unwrap(), CostLevel::Luxury);
        assert!("opulent".parse::<CostLevel>().is_err());
    }

    #[test]
    fn test_preferences_default_to_sensible_values() {
        let prefs = BudgetPreferences::default();
        assert!(prefs.accommodation.is_none());
        assert!(prefs.food.is_none());
        assert_eq!(prefs.dining_style, DiningStyle::Mixed);
        assert_eq!(prefs.transport, TransportStyle::PublicTransit);
        assert!(prefs.target_budget.is_none());
    }
}
