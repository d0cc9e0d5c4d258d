use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Result;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "wayfinder.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

const DEFAULT_DB_CONNECTION: &str = "wayfinder.db";
const DEFAULT_CONN_POOL_SIZE: u8 = 10;
const DEFAULT_UPLOADS_DIR: &str = "uploads";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub connection: String,
    pub conn_pool_size: u8,
}

#[derive(Debug)]
pub struct WebServer {
    pub port: Option<u16>,
    /// File system directory for uploaded images.
    pub uploads_dir: PathBuf,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.connection = db_url;
        }
        Ok(cfg)
    }
}

impl From<raw::Config> for Config {
    fn from(raw: raw::Config) -> Self {
        let raw_db = raw.db.unwrap_or_default();
        let db = Db {
            connection: raw_db
                .connection
                .unwrap_or_else(|| DEFAULT_DB_CONNECTION.to_string()),
            conn_pool_size: raw_db.conn_pool_size.unwrap_or(DEFAULT_CONN_POOL_SIZE),
        };
        let raw_webserver = raw.webserver.unwrap_or_default();
        let webserver = WebServer {
            port: raw_webserver.port,
            uploads_dir: raw_webserver
                .uploads_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOADS_DIR)),
        };
        Self { db, webserver }
    }
}
