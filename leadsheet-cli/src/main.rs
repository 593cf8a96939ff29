//! Command-line interface for leadsheet
//! Renders lead sheets (lyrics with inline `[Chord]` markers) to text, HTML, ChordPro or
//! JSON, optionally transposing them first.
//!
//! Usage:
//!   leadsheet `<path>...` [--transpose `<key>`] [--format `<format>`]   - Render songs
//!   leadsheet `<path>...` --detect-key                              - Show the key of each paragraph
//!   leadsheet --list-formats                                        - List output formats
//!
//! Settings come from the embedded defaults, then `--config <file>`, then flags.
//! `RUST_LOG` overrides `-v`/`-q` for diagnostics on stderr.

use clap::{Arg, ArgAction, ArgMatches, Command};
use leadsheet_babel::formats::{TextFormat, TextOptions};
use leadsheet_babel::{FormatError, FormatRegistry};
use leadsheet_config::{ConfigError, LeadsheetConfig, Loader};
use leadsheet_parser::{LoaderError, Note, SongLoader, TransposeError};
use std::process;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{path}: {source}")]
    Load {
        path: String,
        #[source]
        source: LoaderError,
    },

    #[error("{path}: {source}")]
    Transpose {
        path: String,
        #[source]
        source: TransposeError,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}

fn build_cli() -> Command {
    Command::new("leadsheet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render and transpose lead sheets with inline [Chord] markers")
        .arg_required_else_help(true)
        .arg(
            Arg::new("paths")
                .help("Song files to process")
                .num_args(1..)
                .required_unless_present("list-formats"),
        )
        .arg(
            Arg::new("transpose")
                .long("transpose")
                .short('t')
                .value_name("KEY")
                .help("Target key: a root such as D, F# or Bb, or an offset 0-11 from C"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see --list-formats)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("detect-key")
                .long("detect-key")
                .help("Print the estimated key of each paragraph instead of rendering")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("More diagnostics on stderr (repeatable)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only report errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
}

fn init_logging(matches: &ArgMatches) {
    let filter = match matches.get_count("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = if matches.get_flag("quiet") {
        "error"
    } else {
        filter
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(&matches);

    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let registry = build_registry(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return Ok(());
    }

    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .map(|paths| paths.collect())
        .unwrap_or_default();

    if matches.get_flag("detect-key") {
        return handle_detect_key_command(&paths);
    }

    let target = matches
        .get_one::<String>("transpose")
        .map(String::as_str)
        .or_else(|| config.transpose.target());
    handle_render_command(&registry, &paths, target, &config.render.format)
}

fn load_config(matches: &ArgMatches) -> Result<LeadsheetConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("render.format", format.as_str())?;
    }
    let config = loader.build()?;
    debug!(?config, "configuration loaded");
    Ok(config)
}

/// Default formats, with the text layout tuned from the config.
fn build_registry(config: &LeadsheetConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(TextFormat::new(TextOptions {
        show_titles: config.text.show_titles,
        hyphenate: config.text.hyphenate,
    }));
    registry
}

fn load(path: &str) -> Result<SongLoader, CliError> {
    SongLoader::from_path(path).map_err(|source| CliError::Load {
        path: path.to_string(),
        source,
    })
}

/// Handle the render command
fn handle_render_command(
    registry: &FormatRegistry,
    paths: &[&String],
    target: Option<&str>,
    format: &str,
) -> Result<(), CliError> {
    // Resolve the format up front so a typo fails before any file is read.
    let format = registry.get(format)?;

    for path in paths {
        let song = load(path)?
            .transpose_opt(target)
            .map_err(|source| CliError::Transpose {
                path: path.to_string(),
                source,
            })?
            .parse();
        print!("{}", format.render(&song)?);
    }
    Ok(())
}

/// Handle the detect-key command
fn handle_detect_key_command(paths: &[&String]) -> Result<(), CliError> {
    for path in paths {
        let estimates = load(path)?
            .estimate_keys()
            .map_err(|source| CliError::Transpose {
                path: path.to_string(),
                source,
            })?;

        if paths.len() > 1 {
            println!("{}:", path);
        }
        for (idx, estimate) in estimates.iter().enumerate() {
            if estimate.has_signal() {
                println!(
                    "paragraph {}: {} (confidence {})",
                    idx + 1,
                    Note::key_name(estimate.offset),
                    estimate.confidence
                );
            } else {
                println!("paragraph {}: no chords", idx + 1);
            }
        }
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {:<10} {}", name, format.description());
        }
    }
}
