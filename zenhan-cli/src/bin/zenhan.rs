use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use zenhan_cli::Settings;
use zenhan_cli::logging::init_logging;
use zenhan_cli::stream::convert_stream;
use zenhan_engine::{Converter, Direction, MappingEntry, mapping_table};

/// zenhan — convert text between halfwidth and fullwidth forms.
#[derive(Parser, Debug)]
#[command(name = "zenhan")]
#[command(about = "Convert text between halfwidth and fullwidth forms", long_about = None)]
struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert halfwidth text to fullwidth.
    ///
    /// Arguments are joined with spaces; without arguments, stdin is converted
    /// line by line.
    Widen {
        /// Text to convert
        text: Vec<String>,
    },

    /// Convert fullwidth text to halfwidth.
    ///
    /// Arguments are joined with spaces; without arguments, stdin is converted
    /// line by line.
    Narrow {
        /// Text to convert
        text: Vec<String>,
    },

    /// Convert in the configured direction.
    Convert {
        /// Direction: widen or narrow (defaults to `conversion.direction` in the config)
        #[arg(short, long)]
        direction: Option<Direction>,

        /// Text to convert
        text: Vec<String>,
    },

    /// Print the mapping table.
    Table {
        /// Print the fullwidth -> halfwidth table instead
        #[arg(short, long)]
        reverse: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: TableFormat,
    },

    /// Print the effective configuration as TOML.
    Config {
        /// Write it to the config file (`--config` or the user config directory) instead
        #[arg(short, long)]
        write: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TableFormat {
    Tsv,
    Json,
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        // Not written yet (e.g. `config --write`): start from defaults
        Some(path) if !path.exists() => {
            tracing::debug!("Config file {:?} not found, using defaults", path);
            Ok(Settings::default())
        }
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

// --- convert subcommands ---

fn run_convert(direction: Direction, text: Vec<String>) -> Result<()> {
    let converter = Converter::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !text.is_empty() {
        writeln!(out, "{}", converter.convert(&text.join(" "), direction))?;
        return Ok(());
    }

    tracing::debug!("Converting stdin ({})", direction);
    convert_stream(&converter, direction, io::stdin().lock(), out)
        .context("failed to convert stdin")
}

// --- table subcommand ---

fn run_table(reverse: bool, format: TableFormat) -> Result<()> {
    let table = mapping_table();
    let entries: Vec<MappingEntry> = if reverse {
        table.reverse_entries()
    } else {
        table.entries()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        TableFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &entries)?;
            writeln!(out)?;
        }
        TableFormat::Tsv => {
            for entry in &entries {
                let (from, to) = if reverse {
                    (entry.fullwidth, entry.halfwidth)
                } else {
                    (entry.halfwidth, entry.fullwidth)
                };
                writeln!(
                    out,
                    "U+{:04X}\tU+{:04X}\t{}\t{}",
                    from as u32,
                    to as u32,
                    from.escape_debug(),
                    to.escape_debug()
                )?;
            }
        }
    }
    Ok(())
}

// --- config subcommand ---

fn run_config(settings: &Settings, path: Option<PathBuf>, write: bool) -> Result<()> {
    if !write {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    let Some(path) = path.or_else(Settings::config_file) else {
        anyhow::bail!("Could not determine config directory; pass --config");
    };
    settings.save_to(&path)?;
    eprintln!("Wrote {:?}", path);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_ref())?;

    let level = if cli.verbose {
        "debug"
    } else {
        settings.logging.level.as_str()
    };
    init_logging(level);

    match cli.command {
        Commands::Widen { text } => run_convert(Direction::Widen, text),
        Commands::Narrow { text } => run_convert(Direction::Narrow, text),
        Commands::Convert { direction, text } => {
            let direction = direction.unwrap_or(settings.conversion.direction);
            run_convert(direction, text)
        }
        Commands::Table { reverse, format } => run_table(reverse, format),
        Commands::Config { write } => run_config(&settings, cli.config, write),
    }
}
