use crate::chat::ResponseFormat;
use crate::constants::{
    API_KEY_VAR, CMD_GPT4, DEFAULT_MODEL, GPT4_MODEL, GPT_API_URL, OPT_ENV_FILE, OPT_JSON,
    OPT_MODEL, ORGANIZATION_VAR, REQUEST_TIMEOUT,
};
use crate::errors::ConfigError;
use std::{
    env, fmt,
    path::{Path, PathBuf},
    time::Duration,
};

/// Everything the API client needs, resolved once at startup.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Duration,
    pub organization: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: GPT_API_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            organization: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        config.organization = lookup(ORGANIZATION_VAR)
            .map(|org| org.trim().to_string())
            .filter(|org| !org.is_empty());
        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("organization", &self.organization)
            .finish()
    }
}

/// Command-line settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub model: String,
    pub response_format: Option<ResponseFormat>,
    pub env_file: Option<PathBuf>,
    pub show_help: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            response_format: None,
            env_file: None,
            show_help: false,
        }
    }
}

/// Parses `args` as produced by `env::args()`, program name included.
pub fn parse_args(args: &[String]) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-h" | "-help" => settings.show_help = true,
            CMD_GPT4 => settings.model = GPT4_MODEL.to_string(),
            OPT_JSON => settings.response_format = Some(ResponseFormat::JsonObject),
            OPT_MODEL => {
                settings.model = rest
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?
                    .clone();
            }
            OPT_ENV_FILE => {
                let path = rest
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                settings.env_file = Some(PathBuf::from(path));
            }
            other => return Err(ConfigError::UnknownArgument(other.to_string())),
        }
    }

    Ok(settings)
}

/// Loads `.env`-style variables into the process environment.
///
/// Without an explicit path a missing `./.env` is fine, but one that exists
/// and fails to parse is still an error. An explicit file must load.
pub fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
    match path {
        None => tolerate_missing(dotenv::dotenv(), Path::new(".env")),
        Some(path) => dotenv::from_path(path).map_err(|source| env_file_error(path, source)),
    }
}

pub(crate) fn tolerate_missing<T>(
    result: Result<T, dotenv::Error>,
    path: &Path,
) -> Result<(), ConfigError> {
    match result {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(env_file_error(path, err)),
    }
}

fn env_file_error(path: &Path, source: dotenv::Error) -> ConfigError {
    ConfigError::EnvFile {
        path: path.display().to_string(),
        source,
    }
}
