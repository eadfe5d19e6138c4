use crate::constants::DEFAULT_VISIT_DURATION_MINUTES;
use crate::models::{Place, PlaceCategory, ScheduledPlace, TimeBlock};

/// Estimated visit duration (minutes) by primary category tag.
pub fn visit_duration_minutes(category: Option<PlaceCategory>) -> u32 {
    match category {
        Some(PlaceCategory::Museum) => 180,
        Some(PlaceCategory::Gallery) => 120,
        Some(PlaceCategory::AmusementPark) => 240,
        Some(PlaceCategory::Zoo) => 180,
        Some(PlaceCategory::Theatre) => 150,
        Some(PlaceCategory::Restaurant) => 90,
        Some(PlaceCategory::Cafe) => 60,
        Some(PlaceCategory::Market) => 60,
        Some(PlaceCategory::Park) => 90,
        Some(PlaceCategory::Beach) => 120,
        Some(PlaceCategory::Shopping) => 120,
        Some(PlaceCategory::Attraction) => 120,
        Some(PlaceCategory::Monument) => 60,
        Some(PlaceCategory::Viewpoint) => 45,
        Some(PlaceCategory::Historic) => 90,
        Some(PlaceCategory::Nightlife) => 120,
        Some(PlaceCategory::Lodging) | None => DEFAULT_VISIT_DURATION_MINUTES,
    }
}

/// Time block for position `index` among `total` ordered places, by
/// relative position within the day.
fn block_for_position(index: usize, total: usize) -> TimeBlock {
    let fraction = index as f64 / total as f64;
    if fraction < 0.25 {
        TimeBlock::Morning
    } else if fraction < 0.5 {
        TimeBlock::Midday
    } else if fraction < 0.75 {
        TimeBlock::Afternoon
    } else {
        TimeBlock::Evening
    }
}

/// Map an ordered day of places to time blocks, start times, 1-based
/// positions, and estimated visit durations.
pub fn assign_time_blocks(ordered: Vec<Place>) -> Vec<ScheduledPlace> {
    let total = ordered.len();

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, place)| {
            let time_block = block_for_position(i, total);
            let estimated_duration_minutes = visit_duration_minutes(place.primary_category());
            ScheduledPlace {
                place,
                time: time_block.start_time().to_string(),
                time_block,
                estimated_duration_minutes,
                order: (i + 1) as u32,
            }
        })
        .collect()
}
