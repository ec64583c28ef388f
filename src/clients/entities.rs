use serde::{Deserialize, Serialize};

/// A track record as returned by the catalog search, shaped after the
/// Spotify Web API track object. Missing optional parts deserialize to
/// their defaults so that sparse records never fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTrack {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<CatalogArtist>,
    pub album: CatalogAlbum,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogArtist {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<CatalogImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

/// Display-ready track, one per search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub title: String,
    pub artist_name: String,
    pub artist_id: Option<String>, // primary artist only
    pub album_name: String,
    pub album_art: Option<String>,
    pub popularity: u32,
    pub duration_ms: u64,
    pub duration_display: String,
    pub preview_url: Option<String>,
    pub url: String,
}

/// One bar of the artist popularity chart. Repeated artists keep one row each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistPopularity {
    pub artist_name: String,
    pub popularity: u32,
}
