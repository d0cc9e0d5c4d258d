#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

use wayfinder_db_sqlite::Connections;

mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, port: Option<u16>, cfg: Cfg) {
    web::run(connections.into(), port, cfg).await;
}
