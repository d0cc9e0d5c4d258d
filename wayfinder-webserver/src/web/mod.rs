use std::path::PathBuf;

use rocket::{config::Config as RocketCfg, Rocket, Route};

mod error;
mod frontend;
mod guards;
mod sqlite;
mod uploads;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub uploads_dir: PathBuf,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    if let Err(err) = std::fs::create_dir_all(&cfg.uploads_dir) {
        error!(
            "Failed to create uploads directory {}: {err}",
            cfg.uploads_dir.display()
        );
    }

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .mount(
            "/uploads",
            rocket::fs::FileServer::from(&cfg.uploads_dir).rank(20),
        )
        .manage(db)
        .manage(cfg);
    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(db: sqlite::Connections, port: Option<u16>, cfg: Cfg) {
    let rocket_cfg = port.map(|port| RocketCfg {
        port,
        ..RocketCfg::default()
    });
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg,
        cfg,
    };
    let instance = rocket_instance(options, db);
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
    }
}
