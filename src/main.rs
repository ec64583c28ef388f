use std::process::ExitCode;

use log::error;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine, variables may come from the shell
    dotenvy::dotenv().ok();
    env_logger::init();

    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", cli::describe(&e));
            ExitCode::FAILURE
        }
    }
}
