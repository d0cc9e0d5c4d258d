#[macro_use]
extern crate log;

mod cli;
mod config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    if let Err(err) = cli::run().await {
        error!("{err}");
        std::process::exit(1);
    }
}
