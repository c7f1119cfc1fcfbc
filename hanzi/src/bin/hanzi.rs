//! The `hanzi` command line tool.

use std::io::IsTerminal;
use std::io::stderr;
use std::path::PathBuf;

use anyhow::Result;
use anyhow::bail;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap_verbosity_flag::Verbosity;
use colored::Colorize;
use hanzi::cli;
use tracing_log::AsTrace;

/// Validates a deck document against the content repository schema.
#[derive(Args)]
#[clap(disable_version_flag = true)]
pub struct ValidateCommand {
    /// The path to the deck JSON file.
    #[clap(value_name = "PATH")]
    pub path: PathBuf,
}

impl ValidateCommand {
    /// Executes the `validate` subcommand.
    fn exec(self) -> Result<()> {
        let report = cli::validate(&self.path)?;
        println!("{report}");

        if !report.passed() {
            bail!(
                "deck `{path}` failed validation with {count} diagnostic{s}",
                path = self.path.display(),
                count = report.diagnostics().len(),
                s = if report.diagnostics().len() == 1 {
                    ""
                } else {
                    "s"
                }
            );
        }

        Ok(())
    }
}

/// Attaches stroke geometry from the Make Me a Hanzi dataset to a deck.
#[derive(Args)]
#[clap(disable_version_flag = true)]
pub struct EnrichCommand {
    /// The path to the deck JSON file; rewritten in place.
    #[clap(value_name = "PATH")]
    pub path: PathBuf,

    /// The path to the dataset's `graphics.txt` file.
    #[clap(long, value_name = "GRAPHICS", default_value = "makemeahanzi/graphics.txt")]
    pub graphics: PathBuf,
}

impl EnrichCommand {
    /// Executes the `enrich` subcommand.
    fn exec(self) -> Result<()> {
        let summary = cli::enrich(&self.path, &self.graphics)?;

        println!(
            "{count} character{s} updated",
            count = summary.updated,
            s = if summary.updated == 1 { "" } else { "s" }
        );

        if !summary.missing.is_empty() {
            println!(
                "missing stroke data for: {characters}",
                characters = summary.missing.join(", ")
            );
        }

        Ok(())
    }
}

/// A tool for validating and enriching LearnTheCharacters deck documents.
#[derive(Parser)]
#[clap(
    bin_name = "hanzi",
    version,
    propagate_version = true,
    arg_required_else_help = true
)]
struct App {
    /// The subcommand to use.
    #[command(subcommand)]
    command: Command,

    /// The verbosity flags.
    #[command(flatten)]
    verbose: Verbosity,
}

/// The supported subcommands.
#[derive(Subcommand)]
enum Command {
    /// Validates a deck file.
    Validate(ValidateCommand),

    /// Attaches stroke geometry to a deck file.
    Enrich(EnrichCommand),
}

fn main() -> Result<()> {
    let app = App::parse();

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(app.verbose.log_level_filter().as_trace())
        .with_writer(std::io::stderr)
        .with_ansi(stderr().is_terminal())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Err(e) = match app.command {
        Command::Validate(cmd) => cmd.exec(),
        Command::Enrich(cmd) => cmd.exec(),
    } {
        eprintln!(
            "{error}: {e:?}",
            error = if std::io::stderr().is_terminal() {
                "error".red().bold()
            } else {
                "error".normal()
            }
        );
        std::process::exit(1);
    }

    Ok(())
}
