use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("wayfinder.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection: Option<String>,
    pub conn_pool_size: Option<u8>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub port: Option<u16>,
    pub uploads_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("valid default configuration")
    }
}
