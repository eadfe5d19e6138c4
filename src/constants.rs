//! Stable engine-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For runtime tuning knobs see [`EngineConfig`](crate::config::EngineConfig).

// --- Clustering ---

/// Default radius (km) within which a place joins an existing cluster.
/// Overridden by `CLUSTER_RADIUS_KM`.
pub const DEFAULT_CLUSTER_RADIUS_KM: f64 = 2.0;

// --- Cache defaults (seconds / entries, used when env vars are absent) ---

/// Default budget estimate cache TTL: 1 hour. Overridden by `BUDGET_CACHE_TTL`.
pub const DEFAULT_BUDGET_CACHE_TTL_SECONDS: u64 = 3_600;
/// Default transport comparison cache TTL: 30 minutes.
/// Overridden by `DIRECTIONS_CACHE_TTL`.
pub const DEFAULT_DIRECTIONS_CACHE_TTL_SECONDS: u64 = 1_800;
/// Maximum entries per in-memory cache (LRU eviction).
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 1_000;

// --- Scheduling & timing ---

/// Theme assigned to a day with no dominant category (tie or empty day).
pub const MIXED_ACTIVITIES_THEME: &str = "Mixed Activities";
/// Visit duration (minutes) for places whose category has no table entry.
pub const DEFAULT_VISIT_DURATION_MINUTES: u32 = 90;

// --- Budget model coefficients ---

/// Flat daily rate for a rental car, tier-independent.
pub const RENTAL_CAR_DAILY_RATE: f64 = 40.0;
/// Assumed taxi rides per day when the traveler prefers taxis.
pub const TAXI_RIDES_PER_DAY: f64 = 10.0;
/// Daily transport rate multiplier for travelers who mostly walk.
pub const WALKING_TRANSPORT_MULTIPLIER: f64 = 0.3;
/// Per-place daily hop cost between attractions (scaled by places/day).
pub const ATTRACTION_HOP_RATE: f64 = 2.5;

/// Food budget split across meals.
pub const FOOD_SPLIT_BREAKFAST: f64 = 0.25;
pub const FOOD_SPLIT_LUNCH: f64 = 0.35;
pub const FOOD_SPLIT_DINNER: f64 = 0.40;

/// Incidentals split: shopping / tips / emergency / souvenirs.
pub const MISC_SPLIT_SHOPPING: f64 = 0.40;
pub const MISC_SPLIT_TIPS: f64 = 0.20;
pub const MISC_SPLIT_EMERGENCY: f64 = 0.20;
pub const MISC_SPLIT_SOUVENIRS: f64 = 0.20;

/// Budget confidence starts here and accrues bonuses for known inputs.
pub const BUDGET_CONFIDENCE_BASE: f64 = 0.7;
/// Hard cap on any confidence value produced by the engine.
pub const CONFIDENCE_CAP: f64 = 0.95;
/// Alignment tolerance: estimates within ±20% of the target are "on budget".
pub const BUDGET_ALIGNMENT_TOLERANCE_PCT: f64 = 0.20;

// --- Transport recommendation ---

/// Recommendation confidence floor before the score-gap bonus.
pub const RECOMMENDATION_CONFIDENCE_BASE: f64 = 0.5;
/// Divisor converting the winner/runner-up score gap into a confidence bonus.
pub const RECOMMENDATION_SCORE_GAP_DIVISOR: f64 = 20.0;

// --- Heuristic route fallback speeds (km/h) ---
// Used only when the Directions Provider is unavailable and the heuristic
// strategy is enabled; straight-line distance over these speeds.

pub const HEURISTIC_SPEED_WALKING_KMH: f64 = 4.8;
pub const HEURISTIC_SPEED_BICYCLING_KMH: f64 = 15.0;
pub const HEURISTIC_SPEED_TRANSIT_KMH: f64 = 20.0;
pub const HEURISTIC_SPEED_DRIVING_KMH: f64 = 35.0;
