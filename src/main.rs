// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, TransliterationProvider};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod providers;
mod subtitle_document;
mod transliteration;

/// CLI Wrapper for TransliterationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliProvider {
    Ollama,
    OpenAI,
    Anthropic,
}

impl From<CliProvider> for TransliterationProvider {
    fn from(cli_provider: CliProvider) -> Self {
        match cli_provider {
            CliProvider::Ollama => TransliterationProvider::Ollama,
            CliProvider::OpenAI => TransliterationProvider::OpenAI,
            CliProvider::Anthropic => TransliterationProvider::Anthropic,
        }
    }
}

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert Hindi SRT subtitles to Hinglish (default command)
    Convert(ConvertArgs),

    /// Generate shell completions for hinglify
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input SRT file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Transliteration provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliProvider>,

    /// Model name to use for conversion
    #[arg(short, long)]
    model: Option<String>,

    /// Maximum number of subtitle blocks per service call
    #[arg(short = 'b', long)]
    max_blocks_per_chunk: Option<usize>,

    /// Configuration file path
    #[arg(short, long = "config", default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// hinglify - Hindi to Hinglish SRT subtitle converter
///
/// Converts the Hindi text of SRT subtitle files into Hinglish (Hindi
/// transliterated into the Roman alphabet) using AI providers, while
/// preserving index numbers and timecodes exactly.
#[derive(Parser, Debug)]
#[command(name = "hinglify")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered Hindi to Hinglish subtitle converter")]
#[command(long_about = "hinglify converts Hindi SRT subtitle files to Hinglish using AI providers.

EXAMPLES:
    hinglify movie.srt                       # Convert using default config
    hinglify -f movie.srt                    # Force overwrite existing output
    hinglify -p openai -m gpt-4o movie.srt   # Use specific provider and model
    hinglify -b 25 movie.srt                 # Smaller chunks per service call
    hinglify /subtitles/                     # Convert every SRT in a directory
    hinglify completions bash > hinglify.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

SUPPORTED PROVIDERS:
    ollama    - Local Ollama server (default: llama3.2:3b)
    openai    - OpenAI API (requires API key)
    anthropic - Anthropic Claude API (requires API key)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input SRT file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Transliteration provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliProvider>,

    /// Model name to use for conversion
    #[arg(short, long)]
    model: Option<String>,

    /// Maximum number of subtitle blocks per service call
    #[arg(short = 'b', long)]
    max_blocks_per_chunk: Option<usize>,

    /// Configuration file path
    #[arg(short, long = "config", default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "hinglify", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args).await,
        None => {
            // Default behavior - use top-level args for convenience
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let convert_args = ConvertArgs {
                input_path,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                provider: cli.provider,
                model: cli.model,
                max_blocks_per_chunk: cli.max_blocks_per_chunk,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_convert(convert_args).await
        }
    }
}

/// Apply command-line overrides on top of a loaded or default config.
/// The provider override is applied first so a model override lands in
/// the table entry of the provider actually being used.
fn apply_cli_overrides(config: &mut Config, options: &ConvertArgs) {
    if let Some(provider) = &options.provider {
        config.transliteration.provider = provider.clone().into();
    }

    if let Some(model) = &options.model {
        let provider_str = config.transliteration.provider.to_lowercase_string();
        if let Some(provider_config) = config
            .transliteration
            .available_providers
            .iter_mut()
            .find(|p| p.provider_type == provider_str)
        {
            provider_config.model = model.clone();
        }
    }

    if let Some(max_blocks) = options.max_blocks_per_chunk {
        config.conversion.max_blocks_per_chunk = max_blocks;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
}

async fn run_convert(options: ConvertArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        apply_cli_overrides(&mut config, &options);

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();
        apply_cli_overrides(&mut config, &options);

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller
    let controller = Controller::with_config(config.clone())?;

    // Run the controller with the input file(s) and output directory
    if options.input_path.is_file() {
        let output_dir = options
            .output_dir
            .clone()
            .unwrap_or_else(|| options.input_path.parent().unwrap_or(Path::new(".")).to_path_buf());

        controller
            .run(options.input_path.clone(), output_dir, options.force_overwrite)
            .await?;
    } else if options.input_path.is_dir() {
        controller
            .run_folder(options.input_path.clone(), options.force_overwrite)
            .await?;
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}
