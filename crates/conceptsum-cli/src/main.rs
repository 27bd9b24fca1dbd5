//! Conceptsum CLI - extractive summarization by concept coverage.

use clap::Parser;
use conceptsum_cli::cli::SummarizerArgs;
use conceptsum_cli::commands;
use conceptsum_cli::{Cli, Command, Config, Formatter};
use conceptsum_decoder::{Decoder, SummarizerConfig};
use conceptsum_ilp::ExternalSolver;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn decoder(
    args: &SummarizerArgs,
    config: &SummarizerConfig,
) -> conceptsum_cli::Result<Decoder<ExternalSolver>> {
    let config = args.apply(config.clone())?;
    Ok(Decoder::external(config)?)
}

fn run() -> conceptsum_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config, falling back to defaults when no file exists
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Summarize(args) => {
            let decoder = decoder(&args.summarizer, &config.summarizer)?;
            commands::execute_summarize(args.input.as_deref(), &decoder, &formatter)?;
        }
        Command::Batch(args) => {
            let decoder = decoder(&args.summarizer, &config.summarizer)?;
            commands::execute_batch(
                &args.dataset,
                &args.summaries,
                args.fallback,
                &decoder,
                &formatter,
            )?;
        }
        Command::Model(args) => {
            let decoder = decoder(&args.summarizer, &config.summarizer)?;
            commands::execute_model(args.input.as_deref(), &decoder, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args.action, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
