pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod profile;
pub mod store;

use cli::Cli;
use error::AppResult;

pub use profile::{NormalizedProfile, normalize};

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
