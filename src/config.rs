use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub recommender: RecommenderSettings,
    #[serde(default)]
    pub map: MapSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommenderSettings {
    #[serde(default = "default_recommender_endpoint")]
    pub endpoint: String,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            endpoint: default_recommender_endpoint(),
        }
    }
}

fn default_recommender_endpoint() -> String { "http://localhost:8000/recommend".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MapSettings {
    #[serde(default = "default_map_script_base")]
    pub script_base: String,
    #[serde(default)]
    pub client_id: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            script_base: default_map_script_base(),
            client_id: String::new(),
        }
    }
}

fn default_map_script_base() -> String { "https://oapi.map.naver.com/openapi/v3/maps.js".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Variables look like `PETMATCH__SERVER__PORT` and land on `server.port`.
fn prefixed_env() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

const ENV_PREFIX: &str = "PETMATCH";

impl Settings {
    /// Layered load: struct defaults, then `config/default`, `config/local`,
    /// then `PETMATCH__*` variables and finally the unprefixed fallbacks.
    pub fn load() -> Result<Self, ConfigError> {
        let layered = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(prefixed_env())
            .build()?;

        substitute_env_vars(layered)?.try_deserialize()
    }

    /// Same as [`Settings::load`] but reads a single explicit file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(prefixed_env())
            .build()?
            .try_deserialize()
    }
}

/// Pick up the widely used unprefixed variables
///
/// `NAVER_CLIENT_ID` feeds the map widget key and `RECOMMENDER_URL` the upstream endpoint,
/// unless the prefixed variants already set them.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let client_id = env::var("PETMATCH__MAP__CLIENT_ID")
        .or_else(|_| env::var("NAVER_CLIENT_ID"))
        .ok();
    let recommender = env::var("PETMATCH__RECOMMENDER__ENDPOINT")
        .or_else(|_| env::var("RECOMMENDER_URL"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(client_id) = client_id {
        builder = builder.set_override("map.client_id", client_id)?;
    }
    if let Some(endpoint) = recommender {
        builder = builder.set_override("recommender.endpoint", endpoint)?;
    }

    builder.build()
}
