mod cli;
mod infra;
mod recommend;
mod routes;
mod server;

use product_matcher::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
