use crate::models::{BudgetEstimate, TransportComparison};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Cache statistics for monitoring.
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

fn stats(hits: &AtomicU64, misses: &AtomicU64) -> CacheStats {
    let hits = hits.load(Ordering::Relaxed);
    let misses = misses.load(Ordering::Relaxed);
    let hit_rate = if hits + misses > 0 {
        (hits as f64 / (hits + misses) as f64) * 100.0
    } else {
        0.0
    };
    CacheStats {
        hits,
        misses,
        hit_rate,
    }
}

/// In-memory cache for budget estimates backed by moka with TTL and
/// bounded capacity. Estimation is synchronous, so this is the sync cache.
/// Concurrent misses on the same key may both compute; that duplicate work
/// is accepted (no single-flight).
pub struct EstimateCache {
    estimates: moka::sync::Cache<String, Arc<BudgetEstimate>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl EstimateCache {
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let estimates = moka::sync::Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        EstimateCache {
            estimates,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<BudgetEstimate>> {
        match self.estimates.get(key) {
            Some(estimate) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Cache hit for budget estimate: {}", key);
                Some(estimate)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Cache miss for budget estimate: {}", key);
                None
            }
        }
    }

    pub fn insert(&self, key: &str, estimate: BudgetEstimate) -> Arc<BudgetEstimate> {
        let estimate = Arc::new(estimate);
        self.estimates.insert(key.to_string(), estimate.clone());
        estimate
    }

    pub fn stats(&self) -> CacheStats {
        stats(&self.hits, &self.misses)
    }
}

/// In-memory cache for transport comparisons. The advisor is async, so
/// this wraps moka's future cache.
pub struct ComparisonCache {
    comparisons: moka::future::Cache<String, Arc<TransportComparison>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ComparisonCache {
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let comparisons = moka::future::Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        ComparisonCache {
            comparisons,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Arc<TransportComparison>> {
        match self.comparisons.get(key).await {
            Some(comparison) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Cache hit for transport comparison: {}", key);
                Some(comparison)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Cache miss for transport comparison: {}", key);
                None
            }
        }
    }

    pub async fn insert(&self, key: &str, comparison: TransportComparison) -> Arc<TransportComparison> {
        let comparison = Arc::new(comparison);
        self.comparisons
            .insert(key.to_string(), comparison.clone())
            .await;
        comparison
    }

    pub fn stats(&self) -> CacheStats {
        stats(&self.hits, &self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPreferences, TripParams};
    use crate::services::budget::compute_estimate;

    fn make_estimate() -> BudgetEstimate {
        let trip = TripParams {
            destination: "Paris".to_string(),
            nights: 3,
            travelers: 2,
            places: vec![],
        };
        compute_estimate(&trip, &BudgetPreferences::default())
    }

    #[test]
    fn estimate_cache_miss_then_hit() {
        let cache = EstimateCache::new(3600, 100);
        assert!(cache.get("k").is_none());

        cache.insert("k", make_estimate());
        assert!(cache.get("k").is_some());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate - 50.0).abs() < 1e-9);
    }

    #[test]
    fn estimate_cache_ttl_expiry() {
        let cache = EstimateCache::new(1, 100); // 1 second TTL
        cache.insert("k", make_estimate());
        assert!(cache.get("k").is_some());

        std::thread::sleep(Duration::from_secs(2));
        assert!(cache.get("k").is_none());
    }

    #[tokio::test]
    async fn comparison_cache_roundtrip() {
        let cache = ComparisonCache::new(3600, 100);
        assert!(cache.get("k").await.is_none());

        cache
            .insert(
                "k",
                TransportComparison {
                    modes: vec![],
                    summary: None,
                    recommendation: None,
                },
            )
            .await;
        assert!(cache.get("k").await.is_some());
    }
}
