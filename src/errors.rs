use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("could not load env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenv::Error,
    },

    #[error("invalid value for header {0}")]
    InvalidHeader(&'static str),

    #[error("could not build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("missing value for option {0}")]
    MissingValue(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("could not send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("non-OK status: {status}\nBody: {body}")]
    Remote { status: StatusCode, body: String },

    #[error("could not decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Whether the console loop may carry on with the next prompt.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ApiError::Encode(_))
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}
