use crate::constants::MIXED_ACTIVITIES_THEME;
use crate::models::{Pace, Place, PlaceCategory};
use crate::services::clustering::PlaceCluster;
use std::collections::HashMap;

/// Distribute clustered places across trip days under the pace cap.
///
/// Places are taken cluster-by-cluster in cluster order. Each pass over the
/// days lets every day accept up to the cap; if places remain after all
/// days were visited, the fill wraps back to day 1 and the cap is exceeded
/// on the second pass. Wraparound guarantees no place is ever dropped.
/// Returns one bucket per day (index 0 = day 1), empty buckets included.
pub fn distribute(
    clusters: Vec<PlaceCluster>,
    trip_length_days: u32,
    pace: Pace,
) -> Vec<Vec<Place>> {
    // A zero-length trip degrades to a single day rather than failing.
    let day_count = trip_length_days.max(1) as usize;
    let cap = pace.max_places_per_day();

    let queue: Vec<Place> = clusters
        .into_iter()
        .flat_map(|c| c.into_members())
        .collect();

    let mut days: Vec<Vec<Place>> = vec![Vec::new(); day_count];
    let mut next = 0;

    while next < queue.len() {
        let pass_start = next;
        for day in days.iter_mut() {
            let take = cap.min(queue.len() - next);
            day.extend(queue[next..next + take].iter().cloned());
            next += take;
            if next == queue.len() {
                break;
            }
        }
        if next > pass_start && next < queue.len() {
            tracing::debug!(
                remaining = queue.len() - next,
                "Pace cap reached on all {} days, wrapping remaining places back to day 1",
                day_count
            );
        }
    }

    days
}

/// Derive a day's theme from the most frequent primary category among its
/// places. Ties and empty days fall back to "Mixed Activities".
pub fn derive_theme(places: &[Place]) -> String {
    let mut counts: HashMap<PlaceCategory, usize> = HashMap::new();
    for place in places {
        if let Some(category) = place.primary_category() {
            *counts.entry(category).or_insert(0) += 1;
        }
    }

    let Some(max) = counts.values().copied().max() else {
        return MIXED_ACTIVITIES_THEME.to_string();
    };

    let leaders: Vec<PlaceCategory> = counts
        .iter()
        .filter(|(_, &count)| count == max)
        .map(|(&category, _)| category)
        .collect();

    match leaders.as_slice() {
        [leader] => leader.theme_label().to_string(),
        _ => MIXED_ACTIVITIES_THEME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;
    use crate::services::clustering::cluster_places;

    fn place(id: &str, category: PlaceCategory) -> Place {
        Place::new(
            id,
            format!("Place {}", id),
            Coordinates::new(48.8566, 2.3522).unwrap(),
            vec![category],
        )
    }

    fn places(n: usize) -> Vec<Place> {
        (0..n)
            .map(|i| place(&format!("p{}", i), PlaceCategory::Attraction))
            .collect()
    }

    fn distribute_flat(count: usize, days: u32, pace: Pace) -> Vec<Vec<Place>> {
        let all = places(count);
        distribute(cluster_places(&all, 2.0), days, pace)
    }

    #[test]
    fn seven_places_moderate_two_days_split_four_three() {
        let days = distribute_flat(7, 2, Pace::Moderate);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].len(), 4);
        assert_eq!(days[1].len(), 3);
    }

    #[test]
    fn nine_places_relaxed_two_days_wrap_to_day_one() {
        // First pass fills both days to cap 3; the remaining 3 wrap back
        // to day 1, exceeding its cap.
        let days = distribute_flat(9, 2, Pace::Relaxed);
        assert_eq!(days[0].len(), 6);
        assert_eq!(days[1].len(), 3);
    }

    #[test]
    fn no_place_is_dropped_or_duplicated() {
        let days = distribute_flat(13, 3, Pace::Packed);
        let total: usize = days.iter().map(|d| d.len()).sum();
        assert_eq!(total, 13);

        let mut ids: Vec<&str> = days
            .iter()
            .flatten()
            .map(|p| p.id.as_str())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 13);
    }

    #[test]
    fn empty_input_keeps_all_days_present_but_empty() {
        let days = distribute(vec![], 3, Pace::Moderate);
        assert_eq!(days.len(), 3);
        assert!(days.iter().all(|d| d.is_empty()));
    }

    #[test]
    fn zero_length_trip_degrades_to_single_day() {
        let days = distribute_flat(2, 0, Pace::Moderate);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].len(), 2);
    }

    #[test]
    fn theme_picks_dominant_category() {
        let day = vec![
            place("a", PlaceCategory::Museum),
            place("b", PlaceCategory::Museum),
            place("c", PlaceCategory::Restaurant),
        ];
        assert_eq!(derive_theme(&day), "Museums & Culture");
    }

    #[test]
    fn theme_tie_and_empty_fall_back_to_mixed() {
        let tied = vec![
            place("a", PlaceCategory::Museum),
            place("b", PlaceCategory::Restaurant),
        ];
        assert_eq!(derive_theme(&tied), MIXED_ACTIVITIES_THEME);
        assert_eq!(derive_theme(&[]), MIXED_ACTIVITIES_THEME);
    }
}
