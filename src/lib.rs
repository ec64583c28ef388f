//! Genre Explorer - Discover Spotify tracks by genre
//!
//! This library searches the Spotify catalog for tracks of a genre, shapes
//! them for display and optionally builds an artist popularity side-table.

/// Client modules for interacting with the music catalog
pub mod clients;
/// Genre search pipeline
pub mod explorer;
/// Text renderings of explore results
pub mod render;
/// HTTP API over the explorer
pub mod server;
