//! JSON HTTP surface over the explorer.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::clients::errors::{Error, Result};
use crate::explorer::{Explorer, Genre, PipelineResult, ResultLimit, SearchRequest, UnknownGenre};
use crate::render::{self, MapPoint};

#[derive(Debug, Deserialize)]
pub struct ExploreParams {
    pub genre: Option<String>,
    pub limit: Option<u32>,
    #[serde(default)]
    pub popularity: bool,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExploreResponse {
    pub greeting: Option<String>,
    #[serde(flatten)]
    pub result: PipelineResult,
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenresResponse {
    pub genres: Vec<Genre>,
    pub default_limit: u32,
    pub min_limit: u32,
    pub max_limit: u32,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    cause: String,
}

/// Error answered to HTTP clients, always with the underlying cause
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: &'static str,
    cause: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error.to_string(),
            cause: self.cause,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::SearchFailed(cause) => ApiError {
                status: StatusCode::BAD_GATEWAY,
                error: render::SEARCH_ERROR_BANNER,
                cause: cause.to_string(),
            },
            other => ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: "Internal error.",
                cause: other.to_string(),
            },
        }
    }
}

fn unsupported_genre(cause: String) -> ApiError {
    ApiError {
        status: StatusCode::BAD_REQUEST,
        error: "Unsupported genre.",
        cause,
    }
}

pub fn router(explorer: Arc<Explorer>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/genres", get(genres))
        .route("/api/explore", get(explore))
        .route("/api/demo-map", get(demo_map))
        .with_state(explorer)
}

pub async fn serve(addr: SocketAddr, explorer: Arc<Explorer>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(explorer)).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn genres() -> Json<GenresResponse> {
    Json(GenresResponse {
        genres: Genre::ALL.to_vec(),
        default_limit: ResultLimit::DEFAULT,
        min_limit: ResultLimit::MIN,
        max_limit: ResultLimit::MAX,
    })
}

async fn explore(
    State(explorer): State<Arc<Explorer>>,
    Query(params): Query<ExploreParams>,
) -> std::result::Result<Json<ExploreResponse>, ApiError> {
    let genre: Genre = params
        .genre
        .as_deref()
        .ok_or_else(|| unsupported_genre("missing genre parameter".into()))?
        .parse()
        .map_err(|e: UnknownGenre| unsupported_genre(e.to_string()))?;
    let limit = params
        .limit
        .map_or_else(ResultLimit::default, ResultLimit::clamped);

    let result = explorer
        .explore(SearchRequest::new(genre, limit), params.popularity)
        .await
        .inspect_err(|e| warn!("Explore request for {genre} failed: {e}"))?;

    Ok(Json(ExploreResponse {
        greeting: params
            .name
            .as_deref()
            .and_then(|name| render::greeting(name, genre)),
        warning: result.warning().map(|w| w.to_string()),
        result,
    }))
}

async fn demo_map() -> Json<Vec<MapPoint>> {
    Json(random_points())
}

fn random_points() -> Vec<MapPoint> {
    render::demo_map(&mut rand::rng(), render::DEMO_MAP_POINTS)
}
