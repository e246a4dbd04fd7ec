use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        json,
        store_dir,
        command,
        ..
    } = cli;

    let ctx = AppContext::bootstrap(profile, json, store_dir)?;

    match command {
        Command::Show => commands::show::run(&ctx),
        Command::Read(args) => commands::store::read(&ctx, args),
        Command::Put(args) => commands::store::put(&ctx, args),
        Command::Rm(args) => commands::store::rm(&ctx, args),
        Command::Keys => commands::store::keys(&ctx),
    }
}
