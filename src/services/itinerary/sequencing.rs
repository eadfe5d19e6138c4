use crate::models::Place;

/// Order a day's places with a nearest-neighbor walk starting from the
/// first place in input order. Among the remaining places the one closest
/// to the last-placed place is appended next; ties are broken by input
/// order (first minimum wins), so the result is deterministic for a fixed
/// input. A heuristic, not an optimal tour.
pub fn nearest_neighbor_order(places: Vec<Place>) -> Vec<Place> {
    if places.len() <= 1 {
        return places;
    }

    let mut remaining = places;
    let mut ordered = Vec::with_capacity(remaining.len());
    ordered.push(remaining.remove(0));

    while !remaining.is_empty() {
        let current = &ordered[ordered.len() - 1].location;
        let mut best = 0;
        let mut best_distance = f64::INFINITY;

        for (i, candidate) in remaining.iter().enumerate() {
            let distance = current.distance_to(&candidate.location);
            if distance < best_distance {
                best_distance = distance;
                best = i;
            }
        }

        ordered.push(remaining.remove(best));
    }

    ordered
}
