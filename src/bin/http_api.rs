use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use genre_explorer::explorer::{ConfigBuilder, Explorer};
use genre_explorer::server;
use log::{error, info};

#[derive(Parser)]
#[command(name = "http_api")]
#[command(version, about = "HTTP API for exploring Spotify tracks by genre", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "GENRE_EXPLORER_ADDR", default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Concurrent artist lookups for the popularity side-table
    #[arg(long, default_value_t = 1)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();

    info!("Authorizing Spotify client ...");
    let config = match ConfigBuilder::new().concurrency(cli.concurrency).build().await {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match server::serve(cli.addr, Arc::new(Explorer::new(config))).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
