use anyhow::Context;
use clap::Parser;
use clause_core::ClauseConfig;

mod cli;
mod commands;
mod ingest;

fn main() {
    if let Err(error) = run() {
        eprintln!("clause error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClauseConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ClauseConfig::default(),
    };
    if cli.verbose {
        config.observability.log_level = "debug".to_string();
    }
    clause_observability::init_tracing(&config.observability);

    match &cli.command {
        cli::Commands::Analyze { files, report } => {
            commands::analyze::handle(files, *report, &config, cli.pretty)
        }
        cli::Commands::Phrases { file } => commands::phrases::handle(file, cli.pretty),
    }
}
