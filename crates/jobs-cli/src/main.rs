//! Job postings dashboard CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use jobs_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use jobs_cli::commands::{ReportOutput, run_report, run_summary, run_top};
use jobs_cli::config::Settings;
use jobs_cli::logging::{LogConfig, LogFormat, init_logging};
use jobs_report::TableRenderer;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let table = TableRenderer {
        styled: stdout_styled(cli),
        ..TableRenderer::default()
    };
    match &cli.command {
        Command::Summary(args) => println!("{}", run_summary(args, table)?),
        Command::Report(args) => {
            let settings = Settings::load(cli.config.as_deref())?;
            match run_report(args, settings, table)? {
                ReportOutput::Text(text) => println!("{text}"),
                ReportOutput::Files(paths) => {
                    for path in paths {
                        println!("{}", path.display());
                    }
                }
            }
        }
        Command::Top(args) => println!("{}", run_top(args, table)?),
    }
    Ok(())
}

fn stdout_styled(cli: &Cli) -> bool {
    match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    }
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
