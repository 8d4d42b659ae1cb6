use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tatva_tokens::Command;

/// Compile the Tatva Practice token registry into design-tool formats.
#[derive(Parser)]
#[command(name = "tatva-tokens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// List every export format with its output file name
    List,
    /// Export one format
    Export {
        /// Format id, e.g. `style-dictionary` (see `list`)
        format: String,

        /// Output directory (defaults to config `output_dir`, then the working directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Write the document to stdout instead of a file
        #[arg(long, conflicts_with = "out_dir")]
        stdout: bool,
    },
    /// Export every registered format
    ExportAll {
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Check the registry for duplicate, dangling or malformed tokens
    Validate,
    /// Print token counts per category
    Stats,
}

impl From<CliCommand> for Command {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::List => Self::List,
            CliCommand::Export {
                format,
                out_dir,
                stdout,
            } => Self::Export {
                format,
                out_dir,
                stdout,
            },
            CliCommand::ExportAll { out_dir } => Self::ExportAll { out_dir },
            CliCommand::Validate => Self::Validate,
            CliCommand::Stats => Self::Stats,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tatva_tokens::run(cli.command.into())?;
    Ok(())
}
