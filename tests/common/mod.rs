#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use genre_explorer::clients::Catalog;
use genre_explorer::clients::entities::CatalogTrack;
use genre_explorer::clients::errors::CatalogError;
use genre_explorer::explorer::{ConfigBuilder, Explorer};
use serde_json::json;

/// In-memory catalog with canned answers that counts its calls
pub struct StubCatalog {
    search: Result<Vec<CatalogTrack>, CatalogError>,
    artists: HashMap<String, Result<u32, CatalogError>>,
    pub search_calls: AtomicUsize,
    pub artist_calls: AtomicUsize,
}

impl StubCatalog {
    pub fn with_tracks(tracks: Vec<CatalogTrack>) -> Self {
        let artists = tracks
            .iter()
            .filter_map(|t| t.artists.first().and_then(|a| a.id.clone()))
            .map(|id| {
                let popularity = u32::try_from(id.len() * 7 % 101).unwrap();
                (id, Ok(popularity))
            })
            .collect();
        StubCatalog {
            search: Ok(tracks),
            artists,
            search_calls: AtomicUsize::new(0),
            artist_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_search(err: CatalogError) -> Self {
        StubCatalog {
            search: Err(err),
            artists: HashMap::new(),
            search_calls: AtomicUsize::new(0),
            artist_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_artist(mut self, id: &str, answer: Result<u32, CatalogError>) -> Self {
        self.artists.insert(id.to_string(), answer);
        self
    }

    pub fn searches(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn artist_lookups(&self) -> usize {
        self.artist_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Catalog for StubCatalog {
    async fn search_tracks_by_genre(
        &self,
        _genre: &str,
        limit: u32,
    ) -> Result<Vec<CatalogTrack>, CatalogError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.search
            .clone()
            .map(|tracks| tracks.into_iter().take(limit as usize).collect())
    }

    async fn fetch_artist_popularity(&self, artist_id: &str) -> Result<u32, CatalogError> {
        self.artist_calls.fetch_add(1, Ordering::SeqCst);
        self.artists
            .get(artist_id)
            .cloned()
            .unwrap_or_else(|| Err(CatalogError::Network(format!("unknown artist {artist_id}"))))
    }
}

pub fn record(title: &str, artist: &str) -> CatalogTrack {
    serde_json::from_value(json!({
        "name": title,
        "artists": [{"id": format!("{artist}-id"), "name": artist}],
        "album": {"name": format!("{title} (album)"), "images": [{"url": format!("https://img/{title}")}]},
        "popularity": 50,
        "duration_ms": 222_000,
        "preview_url": null,
        "external_urls": {"spotify": format!("https://open.spotify.com/track/{title}")}
    }))
    .unwrap()
}

pub fn records(titles: &[&str]) -> Vec<CatalogTrack> {
    titles
        .iter()
        .enumerate()
        .map(|(i, t)| record(t, &format!("artist{i}")))
        .collect()
}

pub async fn explorer_over(catalog: Arc<StubCatalog>, concurrency: usize) -> Explorer {
    let config = ConfigBuilder::new()
        .catalog(catalog)
        .concurrency(concurrency)
        .build()
        .await
        .unwrap();
    Explorer::new(config)
}
