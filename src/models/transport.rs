use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Travel mode understood by the Directions Provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Walking,
    Bicycling,
    Transit,
    Driving,
}

impl TransportMode {
    /// Provider routing profile name for this mode.
    pub fn profile(&self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::Bicycling => "bicycling",
            TransportMode::Transit => "transit",
            TransportMode::Driving => "driving",
        }
    }

    /// Fixed eco-friendliness score, 0-10. A ranking input, not measured
    /// emissions.
    pub fn eco_score(&self) -> f64 {
        match self {
            TransportMode::Walking => 10.0,
            TransportMode::Bicycling => 9.0,
            TransportMode::Transit => 7.0,
            TransportMode::Driving => 3.0,
        }
    }

    /// Estimated monetary cost of covering `distance_km` with this mode.
    /// Transit uses the provider fare when one was returned.
    pub fn estimated_cost(&self, distance_km: f64, fare: Option<f64>) -> f64 {
        match self {
            TransportMode::Walking | TransportMode::Bicycling => 0.0,
            TransportMode::Transit => fare.unwrap_or_else(|| (distance_km * 0.5).max(2.0)),
            TransportMode::Driving => distance_km * 0.3,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.profile())
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "walk" | "walking" => Ok(TransportMode::Walking),
            "bike" | "cycling" | "bicycling" | "bicycle" => Ok(TransportMode::Bicycling),
            "transit" | "public_transit" | "bus" => Ok(TransportMode::Transit),
            "drive" | "driving" | "car" => Ok(TransportMode::Driving),
            _ => Err(format!("Invalid transport mode: '{}'", s)),
        }
    }
}

/// One leg of a returned route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStep {
    pub instruction: String,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// A single-mode route as returned by the Directions Provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResult {
    pub duration_seconds: f64,
    pub distance_meters: f64,
    pub steps: Vec<RouteStep>,
    /// Transit fare when the provider reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare: Option<f64>,
}

impl RouteResult {
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds / 60.0
    }
}

/// Uniform result of one fallback strategy for one mode. Strategies are
/// tried in order until one succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ModeOutcome {
    Success(RouteResult),
    Unavailable { reason: String },
}

impl ModeOutcome {
    pub fn as_success(&self) -> Option<&RouteResult> {
        match self {
            ModeOutcome::Success(route) => Some(route),
            ModeOutcome::Unavailable { .. } => None,
        }
    }
}

/// Per-mode derived figures used for comparison and recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeReport {
    pub mode: TransportMode,
    pub outcome: ModeOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    pub eco_score: f64,
}

/// Which successful mode wins each single criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub fastest: TransportMode,
    pub shortest: TransportMode,
    pub cheapest: TransportMode,
    pub most_eco: TransportMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeRecommendation {
    pub mode: TransportMode,
    pub reason: String,
    /// 0.0-0.95, derived from the score gap to the runner-up.
    pub confidence: f64,
}

/// Full multi-mode comparison for one origin/destination pair.
/// `summary` and `recommendation` are `None` when no mode succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportComparison {
    pub modes: Vec<ModeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ComparisonSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<ModeRecommendation>,
}

impl TransportComparison {
    pub fn successful_modes(&self) -> usize {
        self.modes
            .iter()
            .filter(|m| m.outcome.as_success().is_some())
            .count()
    }
}
