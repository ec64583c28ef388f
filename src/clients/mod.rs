/// Catalog trait consumed by the explorer
pub mod catalog;
/// Credential resolution from the environment
pub mod credentials;
/// Data entities for tracks and artists
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify API client
pub mod spotify;

pub use catalog::Catalog;
pub use credentials::SpotifyCredentials;
pub use spotify::SpotifyClient;
