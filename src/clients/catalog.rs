use async_trait::async_trait;

use crate::clients::{entities::CatalogTrack, errors::CatalogError};

/// Read operations the explorer needs from a music catalog.
///
/// Implementations are expected to be already authenticated; callers never
/// re-authenticate per call.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Search tracks matching `genre`, at most `limit` of them.
    /// No matches is an empty vector, not an error.
    async fn search_tracks_by_genre(
        &self,
        genre: &str,
        limit: u32,
    ) -> Result<Vec<CatalogTrack>, CatalogError>;

    /// Popularity score of a single artist
    async fn fetch_artist_popularity(&self, artist_id: &str) -> Result<u32, CatalogError>;
}
