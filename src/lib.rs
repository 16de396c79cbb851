mod cli;
mod demo;
pub mod session;

use persona_engine::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
