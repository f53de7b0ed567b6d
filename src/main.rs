use clap::Parser;
use std::io;

use issue_importer::{
    Importer,
    cli::Args,
    config::{Config, resolver::ConfigResolverBuilder},
    result::Result,
    tracker::{dry_run::DryRunTracker, gh::GhCli, traits::IssueTracker},
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("issue_importer")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    let csv_path = cli_args.csv_path()?;

    let file_config = Config::load(cli_args.config.as_deref())?;

    let config = ConfigResolverBuilder::default()
        .config(file_config)
        .overrides(cli_args.overrides())
        .build()?
        .resolve()?;

    let tracker: Box<dyn IssueTracker> = if cli_args.dry_run {
        Box::new(DryRunTracker::new(&config.tool, &config.repo))
    } else {
        Box::new(GhCli::new(&config.tool, &config.repo))
    };

    let importer = Importer::new(config, tracker);

    importer.run_file(&csv_path, &mut io::stdout())?;

    Ok(())
}
