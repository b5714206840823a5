use clap::Parser;
use daymark::application::{ExportService, ImportService};
use daymark::cli::{format_export_summary, format_import_summary, Cli, Commands};
use daymark::domain::TimezoneLookup;
use daymark::error::DaymarkError;
use daymark::infrastructure::{
    BoundaryTimezoneLookup, Config, DayOneCli, DayOneCommand, DayOneExport, DisabledTimezoneLookup,
    DryRunSink, EntrySink, FileSystemRepository,
};
use std::time::Duration;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DaymarkError> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Import {
            dir,
            journal,
            photo_base,
            recursive,
            dry_run,
            no_timezones,
        } => {
            let repo = FileSystemRepository::open(dir)?;
            let command = DayOneCommand::new(
                config.program.clone(),
                journal.unwrap_or(config.journal),
                photo_base.unwrap_or(config.photo_base),
            );

            let lookup: Box<dyn TimezoneLookup> = if no_timezones {
                Box::new(DisabledTimezoneLookup)
            } else {
                Box::new(BoundaryTimezoneLookup::new())
            };

            let mut sink: Box<dyn EntrySink> = if dry_run {
                Box::new(DryRunSink::new(command, std::io::stdout()))
            } else {
                let delay = Duration::from_millis(config.command_delay_ms);
                Box::new(DayOneCli::new(command, delay))
            };

            let service = ImportService::new(repo, lookup.as_ref());
            let summary = service.execute(sink.as_mut(), recursive)?;
            println!("{}", format_import_summary(&summary));
            Ok(())
        }
        Commands::Export {
            dir,
            out,
            photos_prefix,
        } => {
            let export = DayOneExport::open(dir)?;
            let output = FileSystemRepository::new(out);
            let prefix = photos_prefix.unwrap_or(config.photos_prefix);

            let summary = ExportService::new(export, output, prefix).execute()?;
            println!("{}", format_export_summary(&summary));
            Ok(())
        }
    }
}
