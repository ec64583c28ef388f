//! Genre search pipeline: one search call, record mapping, and an optional
//! per-artist popularity fan-out.

use futures::stream::{StreamExt, TryStreamExt, iter};
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::Arc;

use crate::clients::{
    Catalog, SpotifyClient,
    entities::{ArtistPopularity, Track},
    errors::{CatalogError, Error, Result},
};

pub mod mapping;
pub mod request;

pub use mapping::format_duration;
pub use request::{Genre, ResultLimit, SearchRequest, UnknownGenre, ViewMode};

/// Upper bound for concurrent artist lookups, one per track at most
pub const MAX_CONCURRENCY: usize = ResultLimit::MAX as usize;

// Configuration for the Explorer struct
pub struct Config {
    pub catalog: Arc<dyn Catalog>,
    pub concurrency: usize,
}

pub struct ConfigBuilder {
    catalog: Option<Arc<dyn Catalog>>,
    concurrency: Option<usize>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            catalog: None,
            concurrency: None, // Artist lookups are sequential unless asked otherwise
        }
    }

    #[must_use]
    pub fn catalog(mut self, catalog: Arc<dyn Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    #[must_use]
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Fill in defaults. Without an explicit catalog this resolves Spotify
    /// credentials from the environment and authenticates.
    pub async fn build(self) -> Result<Config> {
        let catalog = match self.catalog {
            Some(c) => c,
            None => Arc::new(SpotifyClient::try_default().await?),
        };
        Ok(Config {
            catalog,
            concurrency: self.concurrency.unwrap_or(1).clamp(1, MAX_CONCURRENCY),
        })
    }
}

/// Terminal state of a successful explore action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Done,
    NoResults,
}

/// Artist popularity side-table. Either every row is present or none is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum SideTable {
    NotRequested,
    Ready(Vec<ArtistPopularity>),
    Failed(CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub genre: Genre,
    pub tracks: Vec<Track>,
    pub popularity: SideTable,
    pub outcome: Outcome,
}

impl PipelineResult {
    pub fn popularity_rows(&self) -> Option<&[ArtistPopularity]> {
        match &self.popularity {
            SideTable::Ready(rows) => Some(rows),
            _ => None,
        }
    }

    /// Side-table failure to report next to an otherwise valid track list
    pub fn warning(&self) -> Option<Error> {
        match &self.popularity {
            SideTable::Failed(cause) => Some(Error::PopularitySideTableFailed(cause.clone())),
            _ => None,
        }
    }
}

// The main Explorer struct that runs the search pipeline
pub struct Explorer {
    config: Config,
}

impl Explorer {
    pub fn new(config: Config) -> Self {
        Explorer { config }
    }

    /// Run one explore action.
    ///
    /// A failing search fails the whole action with [`Error::SearchFailed`]
    /// and no artist lookups are made. An empty search is
    /// [`Outcome::NoResults`]. Side-table failures never fail the action;
    /// they are reported through [`PipelineResult::popularity`].
    pub async fn explore(
        &self,
        request: SearchRequest,
        with_popularity: bool,
    ) -> Result<PipelineResult> {
        let genre = request.genre;
        debug!("Searching {} tracks for genre {genre} ...", request.limit.get());
        let records = self
            .config
            .catalog
            .search_tracks_by_genre(genre.as_str(), request.limit.get())
            .await
            .map_err(|e| {
                warn!("Search for genre {genre} failed: {e}");
                Error::SearchFailed(e)
            })?;

        if records.is_empty() {
            info!("No tracks found for genre {genre}");
            return Ok(PipelineResult {
                genre,
                tracks: Vec::new(),
                popularity: SideTable::NotRequested,
                outcome: Outcome::NoResults,
            });
        }

        let tracks = mapping::map_tracks(records).map_err(Error::SearchFailed)?;
        debug!("Mapped {} tracks for genre {genre}", tracks.len());

        let popularity = if with_popularity {
            match self.popularity_side_table(&tracks).await {
                Ok(rows) => {
                    debug!("Fetched popularity for {} artists", rows.len());
                    SideTable::Ready(rows)
                }
                Err(e) => {
                    warn!("Unable to retrieve artist popularity data: {e}");
                    SideTable::Failed(e)
                }
            }
        } else {
            SideTable::NotRequested
        };

        info!("Explored genre {genre}: {} tracks", tracks.len());
        Ok(PipelineResult {
            genre,
            tracks,
            popularity,
            outcome: Outcome::Done,
        })
    }

    // One artist lookup per track, in track order. The first failure
    // abandons the remaining lookups. Lookups own their inputs so the
    // returned future stays Send for any caller.
    async fn popularity_side_table(
        &self,
        tracks: &[Track],
    ) -> std::result::Result<Vec<ArtistPopularity>, CatalogError> {
        let lookups: Vec<(Option<String>, String, String)> = tracks
            .iter()
            .map(|t| (t.artist_id.clone(), t.artist_name.clone(), t.title.clone()))
            .collect();

        iter(lookups)
            .map(|(artist_id, artist_name, title)| {
                let catalog = Arc::clone(&self.config.catalog);
                async move {
                    let artist_id = artist_id.ok_or_else(|| {
                        CatalogError::MalformedResponse(format!(
                            "artist {artist_name:?} of track {title:?} has no id"
                        ))
                    })?;
                    let popularity = catalog.fetch_artist_popularity(&artist_id).await?;
                    Ok::<_, CatalogError>(ArtistPopularity {
                        artist_name,
                        popularity: popularity.min(100),
                    })
                }
            })
            .buffered(self.config.concurrency)
            .try_collect()
            .await
    }
}
