use std::process;

mod cli;
mod config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    if let Err(err) = cli::run().await {
        log::error!("{err:#}");
        process::exit(1);
    }
}
