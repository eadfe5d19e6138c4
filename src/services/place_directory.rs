use crate::error::Result;
use crate::models::{Coordinates, Place, PlaceCategory};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Options for a Place Directory text search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Bias results toward this location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near: Option<Coordinates>,
    /// Restrict to these category tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<PlaceCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Seam to the external place-search service. The engine treats returned
/// places as already validated and performs no retries of its own; the
/// calling layer owns fallback policy when the directory is down.
#[async_trait]
pub trait PlaceDirectory: Send + Sync {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<Place>>;

    async fn details(&self, place_id: &str) -> Result<Place>;
}
