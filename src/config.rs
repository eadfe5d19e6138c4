use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Radius (km) within which a place joins an existing cluster.
    pub cluster_radius_km: f64,
    /// TTL (seconds) for cached budget estimates.
    pub budget_cache_ttl: u64,
    /// TTL (seconds) for cached transport comparisons.
    pub directions_cache_ttl: u64,
    /// Max entries per in-memory cache.
    pub cache_max_entries: u64,
    /// API key for the concrete Directions Provider client, if used.
    pub directions_api_key: Option<String>,
    /// Base URL override for the Directions Provider client.
    pub directions_base_url: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            cluster_radius_km: DEFAULT_CLUSTER_RADIUS_KM,
            budget_cache_ttl: DEFAULT_BUDGET_CACHE_TTL_SECONDS,
            directions_cache_ttl: DEFAULT_DIRECTIONS_CACHE_TTL_SECONDS,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            directions_api_key: None,
            directions_base_url: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let defaults = Self::default();

        let cluster_radius_km: f64 = env::var("CLUSTER_RADIUS_KM")
            .unwrap_or_else(|_| defaults.cluster_radius_km.to_string())
            .parse()
            .map_err(|_| "Invalid CLUSTER_RADIUS_KM")?;

        if cluster_radius_km <= 0.0 || cluster_radius_km > 50.0 {
            return Err("CLUSTER_RADIUS_KM must be between 0 and 50".to_string());
        }

        Ok(EngineConfig {
            cluster_radius_km,
            budget_cache_ttl: env::var("BUDGET_CACHE_TTL")
                .unwrap_or_else(|_| defaults.budget_cache_ttl.to_string())
                .parse()
                .map_err(|_| "Invalid BUDGET_CACHE_TTL")?,
            directions_cache_ttl: env::var("DIRECTIONS_CACHE_TTL")
                .unwrap_or_else(|_| defaults.directions_cache_ttl.to_string())
                .parse()
                .map_err(|_| "Invalid DIRECTIONS_CACHE_TTL")?,
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .unwrap_or_else(|_| defaults.cache_max_entries.to_string())
                .parse()
                .map_err(|_| "Invalid CACHE_MAX_ENTRIES")?,
            directions_api_key: env::var("DIRECTIONS_API_KEY").ok(),
            directions_base_url: env::var("DIRECTIONS_BASE_URL").ok(),
        })
    }
}
