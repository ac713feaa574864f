mod cli;
mod render;

use mortgage_quote::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
