mod check;
mod fill;
mod stats;
mod validation;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::check::{CheckOptions, run_check_command};
use crate::fill::{FillOptions, run_fill_command};
use crate::stats::{StatsOptions, run_stats_command};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check localization completeness against the base language.
    ///
    /// Exit code is 0 when every language contains every base key, 1 when
    /// keys are missing or on usage errors.
    Check {
        /// Directory containing the .lproj folders
        #[arg(long, default_value = "Framework/Resources")]
        base_dir: PathBuf,

        /// Path to the base language .strings file (overrides --base-dir)
        #[arg(long)]
        base_file: Option<PathBuf>,

        /// Base language code
        #[arg(long, default_value = "en")]
        base_lang: String,

        /// Name of the .strings file to check
        #[arg(long, default_value = "Localizable.strings")]
        filename: String,

        /// Specific language codes to check (default: auto-discover)
        #[arg(long, num_args = 1..)]
        languages: Option<Vec<String>>,

        /// Path to write the report file
        #[arg(long)]
        report: Option<PathBuf>,

        /// Do not generate a report file
        #[arg(long)]
        no_report: bool,

        /// Only output errors and the exit code
        #[arg(long)]
        quiet: bool,

        /// Create timestamped backups of localization files before checking
        #[arg(long)]
        backup: bool,

        /// Render the report as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Append missing keys to language files with base-value placeholders.
    Fill {
        /// Directory containing the .lproj folders
        #[arg(long, default_value = "Framework/Resources")]
        base_dir: PathBuf,

        /// Base language code
        #[arg(long, default_value = "en")]
        base_lang: String,

        /// Name of the .strings file to fill
        #[arg(long, default_value = "Localizable.strings")]
        filename: String,

        /// Specific language codes to fill (default: auto-discover)
        #[arg(long, num_args = 1..)]
        languages: Option<Vec<String>>,

        /// Report what would be written without touching any file
        #[arg(long)]
        dry_run: bool,

        /// Create timestamped backups before writing
        #[arg(long)]
        backup: bool,
    },

    /// Per-language completion statistics.
    Stats {
        /// Directory containing the .lproj folders
        #[arg(long, default_value = "Framework/Resources")]
        base_dir: PathBuf,

        /// Base language code
        #[arg(long, default_value = "en")]
        base_lang: String,

        /// Name of the .strings file to inspect
        #[arg(long, default_value = "Localizable.strings")]
        filename: String,

        /// Render statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let outcome = match args.commands {
        Commands::Check {
            base_dir,
            base_file,
            base_lang,
            filename,
            languages,
            report,
            no_report,
            quiet,
            backup,
            json,
        } => run_check_command(CheckOptions {
            base_dir,
            base_file,
            base_lang,
            filename,
            languages,
            report,
            no_report,
            quiet,
            backup,
            json,
        })
        .map(|complete| if complete { 0 } else { 1 }),
        Commands::Fill {
            base_dir,
            base_lang,
            filename,
            languages,
            dry_run,
            backup,
        } => run_fill_command(FillOptions {
            base_dir,
            base_lang,
            filename,
            languages,
            dry_run,
            backup,
        })
        .map(|_| 0),
        Commands::Stats {
            base_dir,
            base_lang,
            filename,
            json,
        } => run_stats_command(StatsOptions {
            base_dir,
            base_lang,
            filename,
            json,
        })
        .map(|_| 0),
    };

    match outcome {
        Ok(code) => ExitCode::from(code),
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::from(1)
        }
    }
}
