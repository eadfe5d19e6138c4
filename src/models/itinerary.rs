use crate::models::Place;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// Caller-selected trip density: how many places at most are scheduled
/// into one day on the first pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    Packed,
}

impl Pace {
    pub fn max_places_per_day(&self) -> usize {
        match self {
            Pace::Relaxed => 3,
            Pace::Moderate => 4,
            Pace::Packed => 6,
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pace::Relaxed => write!(f, "relaxed"),
            Pace::Moderate => write!(f, "moderate"),
            Pace::Packed => write!(f, "packed"),
        }
    }
}

impl FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relaxed" => Ok(Pace::Relaxed),
            "moderate" => Ok(Pace::Moderate),
            "packed" => Ok(Pace::Packed),
            _ => Err(format!("Invalid pace: '{}'", s)),
        }
    }
}

/// Coarse part of a day used for display ordering, not precise scheduling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeBlock {
    Morning,
    Midday,
    Afternoon,
    Evening,
}

impl TimeBlock {
    /// Wall-clock start shown to the user for this block.
    pub fn start_time(&self) -> &'static str {
        match self {
            TimeBlock::Morning => "09:00",
            TimeBlock::Midday => "12:00",
            TimeBlock::Afternoon => "14:00",
            TimeBlock::Evening => "18:00",
        }
    }
}

/// A place pinned to a position, time block, and visit duration within a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPlace {
    #[serde(flatten)]
    pub place: Place,
    /// Wall-clock start, e.g. "09:00".
    pub time: String,
    pub time_block: TimeBlock,
    pub estimated_duration_minutes: u32,
    /// 1-based position within the day.
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day index.
    pub day: u32,
    pub theme: String,
    pub places: Vec<ScheduledPlace>,
}

impl DayPlan {
    /// Sum of the day's individual visit durations.
    pub fn total_duration_minutes(&self) -> u32 {
        self.places
            .iter()
            .map(|p| p.estimated_duration_minutes)
            .sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryMetadata {
    pub total_places: usize,
    pub average_places_per_day: f64,
    /// Rough whole-trip budget computed with default preferences.
    pub estimated_budget: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}

/// A complete day-by-day plan. Superseded wholesale by the next
/// optimization run; never mutated incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: Uuid,
    pub destination: String,
    pub trip_length_days: u32,
    /// One entry per day 1..=trip_length_days, empty days included.
    pub days: Vec<DayPlan>,
    pub metadata: ItineraryMetadata,
}

impl Itinerary {
    /// Total places scheduled across all days.
    pub fn total_places(&self) -> usize {
        self.days.iter().map(|d| d.places.len()).sum()
    }
}
