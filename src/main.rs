// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use readtime::app_config::{self, Config, OutputFormat};
use readtime::{load_document, ReadingTimeEstimator, ReadingTimeReport};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "readtime")]
#[command(version)]
#[command(about = "Estimate how long a document takes to read")]
#[command(long_about = "readtime estimates the reading time of an HTML, hast JSON or plain text document, \
adjusting for the difficulty of the text and the age of the target audience.")]
struct CommandLineOptions {
    /// Document to estimate (.html, .htm, .json, .txt, .md)
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Target audience age (5-22, defaults to 16)
    #[arg(short, long, allow_negative_numbers = true)]
    age: Option<f64>,

    /// Configuration file path
    #[arg(short, long, default_value = "readtime.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Print the intermediate values of the estimate
    #[arg(short, long)]
    detailed: bool,
}

// @struct: Custom logger implementation
// Filters on the global max level, so later `set_max_level` calls take effect.
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Start at info; the configured level is applied once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cli_level) = &cli.log_level {
        let log_level: app_config::LogLevel = cli_level.clone().into();
        log::set_max_level(log_level.to_level_filter());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let tree = load_document(&cli.input_path)
        .with_context(|| format!("Failed to load document: {}", cli.input_path.display()))?;

    let estimator = ReadingTimeEstimator::new();
    let report = match estimator.estimate_detailed(&tree, &config.reading_time_options()) {
        Ok(report) => report,
        Err(never) => match never {},
    };

    if report.score.is_none() {
        warn!("Not enough text in {} to score its readability", cli.input_path.display());
    }
    info!(
        "Estimated {:.2} minutes for {}",
        report.minutes,
        cli.input_path.display()
    );

    print_report(&report, config.output, cli.detailed)
}

/// Load the config file if present, then apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let config_path = Path::new(&cli.config_path);
    let mut config = if config_path.exists() {
        debug!("Loading config from {}", config_path.display());
        Config::from_file(config_path)?
    } else {
        debug!("Config file not found at '{}', using defaults", config_path.display());
        Config::default()
    };

    if let Some(age) = cli.age {
        config.age = Some(age);
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
    if let Some(format) = &cli.format {
        config.output = format.clone().into();
    }

    config.validate()?;
    Ok(config)
}

fn print_report(report: &ReadingTimeReport, format: OutputFormat, detailed: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = if detailed {
                serde_json::to_string_pretty(report)
            } else {
                serde_json::to_string(&serde_json::json!({ "minutes": report.minutes }))
            }
            .context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Text if detailed => {
            println!("Minutes:         {}", report.minutes);
            println!("Words:           {}", report.word_count);
            println!("Target age:      {}", report.target_age);
            println!("Target WPM:      {:.1}", report.target_wpm);
            match (report.score, report.readability_age, report.wpm) {
                (Some(score), Some(readability_age), Some(wpm)) => {
                    println!("Readability:     {:.2}", score);
                    println!("Readability age: {:.2}", readability_age);
                    println!("Adjusted WPM:    {:.1}", wpm);
                }
                _ => println!("Readability:     n/a"),
            }
        }
        OutputFormat::Text => println!("{}", report.minutes),
    }

    Ok(())
}
