use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "viewer-profile",
    version,
    about = "Normalize locally stored user data into a viewer profile"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Profile name to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(long, global = true, help = "Override the key-value store directory")]
    pub store_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Show,
    Read(KeyArgs),
    Put(PutArgs),
    Rm(KeyArgs),
    Keys,
}

#[derive(Debug, Args)]
pub struct KeyArgs {
    #[arg(help = "Store key")]
    pub key: String,
}

#[derive(Debug, Args)]
pub struct PutArgs {
    #[arg(help = "Store key")]
    pub key: String,
    #[arg(long, conflicts_with = "file", help = "Inline JSON value")]
    pub value: Option<String>,
    #[arg(long, help = "Read JSON value from file")]
    pub file: Option<PathBuf>,
}
