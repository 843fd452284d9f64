use config::{Config, ConfigError, Environment, File};
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_FILE: &str = "./NotesServer.toml";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DbConfig {
    /// path to the sqlite file. Created on first launch if it doesn't exist
    pub location: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LogConfig {
    /// one of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
    /// if present, logs are written to this file in addition to stdout
    pub file: Option<String>,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NotesServerConfig {
    pub database: DbConfig,
    pub log: LogConfig,
}

/// Builds the application config from ./NotesServer.toml (if it exists) and `NOTES_SERVER__` prefixed
/// environment variables, e.g. `NOTES_SERVER__DATABASE__LOCATION`. Anything not set falls back to the defaults
pub fn parse_config() -> Result<NotesServerConfig, ConfigError> {
    Config::builder()
        .set_default("database.location", "./notes.sqlite")?
        .set_default("log.level", "info")?
        .add_source(File::with_name(CONFIG_FILE).required(false))
        .add_source(Environment::with_prefix("NOTES_SERVER").separator("__"))
        .build()?
        .try_deserialize()
}

/// global variable for config, that way it doesn't need to be repeatedly parsed.
/// If the config can't be parsed the application will panic, since nothing can run without it
pub static NOTES_SERVER_CONFIG: Lazy<NotesServerConfig> = Lazy::new(|| match parse_config() {
    Ok(config) => config,
    Err(e) => panic!("Failed to parse config. Exception is {e}"),
});
