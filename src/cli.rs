use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use wayfinder_webserver::Cfg;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(version, about = "Discover, rate and plan visits to remarkable places")]
pub struct Args {
    /// The port to listen on
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// URL to the SQLite database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;

    // command line flags override the configuration file
    let db_url = args.db_url.unwrap_or(cfg.db.connection);
    let port = args.port.or(cfg.webserver.port);

    info!("Opening SQLite database at {db_url}");
    let connections =
        wayfinder_db_sqlite::Connections::init(&db_url, cfg.db.conn_pool_size.into())?;
    wayfinder_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    wayfinder_webserver::run(
        connections,
        port,
        Cfg {
            uploads_dir: cfg.webserver.uploads_dir,
        },
    )
    .await;
    Ok(())
}
