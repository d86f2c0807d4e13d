use std::path::PathBuf;

use thiserror::Error;

/// Problems with the local setup: environment, arguments or saved defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GOOGLE_MAPS_API_KEY environment variable not found")]
    MissingApiKey,

    #[error("no addresses provided and no saved defaults found")]
    NoAddresses,

    #[error("both an origin and a destination are required")]
    IncompleteAddresses,

    #[error("must provide addresses when using --defaults")]
    DefaultsWithoutAddresses,

    #[error("could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("failed to write defaults to {path}")]
    SaveDefaults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures talking to the directions service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The wrapped error never carries the request URL, which holds the API key.
    #[error("request to directions service failed: {0}")]
    Http(reqwest::Error),

    #[error("directions service returned {status}: {message}")]
    Status { status: String, message: String },

    #[error("No route found between the specified addresses.")]
    NoRoute,
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Http(err.without_url())
    }
}
