//! music-tag CLI application entry point
//!
//! Reads and writes the tags of a single audio file or of every audio file
//! beneath a directory.
//!
//! # Usage
//!
//! ```bash
//! # Print the tags of one file
//! music-tag read song.mp3
//!
//! # Print the tags of every file in a folder, without descending
//! music-tag read Music/ --no-recursive
//!
//! # Set the year on a whole album
//! music-tag write Music/Album -t year=1999 -t genre=Jazz
//!
//! # Machine-readable output
//! music-tag --json read Music/
//!
//! # Change a default
//! music-tag config set threads=4
//! ```
//!
//! # Configuration
//!
//! Defaults are stored in the user's config directory
//! (`~/.config/music-tag/config.toml` on Linux) and may be overridden with
//! `MUSIC_TAG_*` environment variables.

use std::io;
use std::process::ExitCode;

use music_tag::{
    MusicTagError,
    cli::{Cli, Commands},
    commands::{self, OutputStyle},
    config::MusicTagConfig,
    logging,
};

type Result<T> = std::result::Result<T, MusicTagError>;

/// Parse arguments, load configuration and dispatch
///
/// # Errors
///
/// Returns `MusicTagError` if configuration loading fails or the command fails.
fn run(cli: Cli) -> Result<()> {
    let config = MusicTagConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let mut stdout = io::stdout().lock();

    if let Commands::Config { command } = &cli.command {
        let path = MusicTagConfig::config_path()?;
        return commands::config(config, command, &path, quiet, &mut stdout);
    }

    let style = OutputStyle {
        path_format: cli.get_path_format().unwrap_or(config.path_format),
        quiet,
        json: cli.json,
    };
    let mut options = config.default_options();
    if let Some(recursive) = cli.command.recursive_override() {
        options.recursive = recursive;
    }
    let tagger = config.tagger()?;

    match &cli.command {
        Commands::Read { path, .. } => commands::read(&tagger, path, options, style, &mut stdout),
        Commands::Write { path, tags, tags_json, .. } => {
            let tags = commands::write::collect_tags(tags, tags_json.as_deref())?;
            commands::write(&tagger, path, &tags, options, style, &mut stdout)
        }
        Commands::Config { .. } => Ok(()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
