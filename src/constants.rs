use std::time::Duration;

pub const GPT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const GPT4_MODEL: &str = "gpt-4";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const ORGANIZATION_VAR: &str = "OPENAI_ORGANIZATION";
pub const ORGANIZATION_HEADER: &str = "openai-organization";

pub const EXIT_COMMAND: &str = "exit";
pub const CMD_GPT4: &str = "4";
pub const OPT_MODEL: &str = "-m";
pub const OPT_JSON: &str = "-json";
pub const OPT_ENV_FILE: &str = "-env";
