//! Anesthesiologist schedule lookup CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use anesth_cli::commands::{
    EXIT_FAILURE, load_store, resolve_settings, run_lookup, run_schedule, run_surgeons,
};
use anesth_cli::logging::{LogConfig, LogFormat, init_logging};
use anesth_cli::render::render_load_failure;
use anesth_ingest::CLIENT_ID;
use anesth_model::Schedule;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let settings = match resolve_settings(
        cli.schedule.config.as_deref(),
        &cli.schedule.overrides(),
    ) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(EXIT_FAILURE);
        }
    };
    let store = match load_store(&settings) {
        Ok(store) => store,
        Err(failure) => {
            tracing::error!(
                source = %failure.source,
                error = %format!("{:#}", failure.error),
                "schedule load failed"
            );
            eprint!(
                "{}",
                render_load_failure(&failure.source, CLIENT_ID, &failure.error)
            );
            std::process::exit(EXIT_FAILURE);
        }
    };
    let empty = Schedule::default();
    let schedule = store.schedule().unwrap_or(&empty);

    let exit_code = match cli.command {
        Command::Surgeons => {
            print!("{}", run_surgeons(schedule));
            0
        }
        Command::Lookup(args) => {
            match run_lookup(&settings, schedule, &args.date, &args.surgeon, args.json) {
                Ok(report) => {
                    print!("{}", report.output);
                    report.exit_code()
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    EXIT_FAILURE
                }
            }
        }
        Command::Schedule(args) => match run_schedule(schedule, args.date.as_deref()) {
            Ok(text) => {
                print!("{text}");
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                EXIT_FAILURE
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
