use log::debug;

use crate::clients::errors::{Error, Result};

pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";

/// Client-credentials pair for the Spotify Web API
#[derive(Clone, PartialEq, Eq)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

// Never print the secret
impl std::fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

impl SpotifyCredentials {
    // Resolve credentials from the process environment or raise a configuration error
    pub fn from_env() -> Result<Self> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve credentials through an arbitrary lookup. Missing and blank
    /// values are both rejected.
    pub fn resolve<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = required(&lookup, CLIENT_ID_VAR)?;
        let client_secret = required(&lookup, CLIENT_SECRET_VAR)?;
        debug!("Resolved Spotify credentials for client id {client_id}");
        Ok(SpotifyCredentials {
            client_id,
            client_secret,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::ConfigurationError(format!(
            "Spotify API credentials not found. Please set {CLIENT_ID_VAR} and {CLIENT_SECRET_VAR} (missing {key})."
        ))),
    }
}
