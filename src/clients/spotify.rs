use async_trait::async_trait;
use log::debug;

use crate::clients::{
    catalog::Catalog,
    credentials::SpotifyCredentials,
    entities::{CatalogAlbum, CatalogArtist, CatalogImage, CatalogTrack, ExternalUrls},
    errors::{CatalogError, Result},
};
use rspotify::{
    ClientCredsSpotify, Credentials,
    model::{ArtistId, FullTrack, SearchResult, SearchType},
    prelude::*,
};

impl From<FullTrack> for CatalogTrack {
    fn from(t: FullTrack) -> CatalogTrack {
        CatalogTrack {
            name: t.name,
            artists: t
                .artists
                .into_iter()
                .map(|a| CatalogArtist {
                    id: a.id.map(|id| id.id().to_string()),
                    name: a.name,
                })
                .collect(),
            album: CatalogAlbum {
                name: t.album.name,
                images: t
                    .album
                    .images
                    .into_iter()
                    .map(|i| CatalogImage { url: i.url })
                    .collect(),
            },
            popularity: t.popularity,
            // Negative durations never come from the API, but the model type is signed
            duration_ms: u64::try_from(t.duration.num_milliseconds()).unwrap_or(0),
            preview_url: t.preview_url,
            external_urls: ExternalUrls {
                spotify: t.external_urls.get("spotify").cloned().unwrap_or_default(),
            },
        }
    }
}

/// Spotify Web API catalog authenticated with the client-credentials flow
pub struct SpotifyClient {
    pub spotify: ClientCredsSpotify,
}

impl SpotifyClient {
    pub fn new(spotify: ClientCredsSpotify) -> Self {
        SpotifyClient { spotify }
    }

    // Build the client and request the first access token. The token is
    // refreshed by rspotify when it expires.
    pub async fn connect(creds: &SpotifyCredentials) -> Result<Self> {
        let spotify = ClientCredsSpotify::new(Credentials::new(
            &creds.client_id,
            &creds.client_secret,
        ));
        debug!("Requesting Spotify client-credentials token ...");
        spotify
            .request_token()
            .await
            .map_err(|e| CatalogError::Authentication(e.to_string()))?;
        debug!("Spotify token acquired");
        Ok(Self::new(spotify))
    }

    // Resolve credentials from the environment and connect
    pub async fn try_default() -> Result<Self> {
        let creds = SpotifyCredentials::from_env()?;
        Self::connect(&creds).await
    }
}

/// Free-text query the search endpoint understands as a genre filter
pub fn genre_query(genre: &str) -> String {
    format!("genre:{genre}")
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn search_tracks_by_genre(
        &self,
        genre: &str,
        limit: u32,
    ) -> std::result::Result<Vec<CatalogTrack>, CatalogError> {
        let query = genre_query(genre);
        debug!("Searching Spotify tracks with query {query:?}, limit {limit}");
        let result = self
            .spotify
            .search(&query, SearchType::Track, None, None, Some(limit), None)
            .await?;
        match result {
            SearchResult::Tracks(page) => Ok(page.items.into_iter().map(CatalogTrack::from).collect()),
            _ => Err(CatalogError::MalformedResponse(
                "expected a page of tracks from the search endpoint".into(),
            )),
        }
    }

    async fn fetch_artist_popularity(
        &self,
        artist_id: &str,
    ) -> std::result::Result<u32, CatalogError> {
        let id = ArtistId::from_id(artist_id)?;
        let artist = self.spotify.artist(id).await?;
        Ok(artist.popularity)
    }
}
