use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = viewer_profile::cli::Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("viewer_profile={default_level}"))),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = viewer_profile::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
