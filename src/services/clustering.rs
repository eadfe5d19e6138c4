use crate::models::{Coordinates, Place};

/// A spatially co-located group of places used to keep a day's activities
/// geographically coherent. Transient: rebuilt on every engine run.
#[derive(Debug, Clone)]
pub struct PlaceCluster {
    members: Vec<Place>,
}

impl PlaceCluster {
    fn new(seed: Place) -> Self {
        PlaceCluster {
            members: vec![seed],
        }
    }

    pub fn members(&self) -> &[Place] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn into_members(self) -> Vec<Place> {
        self.members
    }

    /// Mean lat/lng over the full member set, recomputed on every read.
    /// Not updated incrementally during clustering so the join rule stays
    /// order-stable within a single pass.
    pub fn centroid(&self) -> Coordinates {
        let n = self.members.len() as f64;
        let (lat_sum, lng_sum) = self
            .members
            .iter()
            .fold((0.0, 0.0), |(lat, lng), place| {
                (lat + place.location.lat, lng + place.location.lng)
            });
        Coordinates {
            lat: lat_sum / n,
            lng: lng_sum / n,
        }
    }
}

/// Greedy single-pass clustering: each place joins the first existing
/// cluster whose centroid lies within `radius_km`, otherwise starts a new
/// singleton. Deterministic for a fixed input order; reordering the input
/// can produce different clusters, which is accepted behavior.
pub fn cluster_places(places: &[Place], radius_km: f64) -> Vec<PlaceCluster> {
    let mut clusters: Vec<PlaceCluster> = Vec::new();

    for place in places {
        let joined = clusters.iter_mut().find(|cluster| {
            cluster.centroid().distance_to(&place.location) <= radius_km
        });

        match joined {
            Some(cluster) => cluster.members.push(place.clone()),
            None => clusters.push(PlaceCluster::new(place.clone())),
        }
    }

    tracing::debug!(
        places = places.len(),
        clusters = clusters.len(),
        radius_km = radius_km,
        "Clustered {} places into {} groups within {}km",
        places.len(),
        clusters.len(),
        radius_km
    );

    clusters
}
