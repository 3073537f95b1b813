use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Env var {0} is not valid unicode")]
    NonUnicodeVar(&'static str),

    #[error("Env var SA_SECRETS_FILE missing")]
    MissingSecretsFile,

    #[error("Failed to load service account credentials from {path:?}: {source}")]
    Credentials {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload is not an array of arrays of strings, numbers or booleans.
    #[error("Malformed value grid: {0}")]
    MalformedGrid(String),

    #[error("Sheets API call failed: {0}")]
    Api(String),

    #[error("Failed to render JSON: {0}")]
    Render(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<google_sheets4::Error> for Error {
    fn from(err: google_sheets4::Error) -> Self {
        Error::Api(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
