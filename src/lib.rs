pub mod color;
mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod notification;
pub mod registry;
pub mod storage;

use std::path::PathBuf;

pub use config::{load_app_config, AppConfig};
pub use error::{AppError, AppResult};

use export::{compilers, dispatch, export_all, ExportContext};
use registry::registry;
use storage::{DirectorySink, SavedExport, StdoutSink};

/// One CLI invocation, already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Export {
        format: String,
        out_dir: Option<PathBuf>,
        stdout: bool,
    },
    ExportAll {
        out_dir: Option<PathBuf>,
    },
    Validate,
    Stats,
}

/// Entrypoint used by the CLI binding.
pub fn run(command: Command) -> AppResult<()> {
    logging::init();
    let config = load_app_config();
    tracing::debug!(?command, ?config, "starting tatva-tokens");

    match command {
        Command::List => {
            let context = ExportContext::now();
            for compiler in compilers() {
                println!(
                    "{:<18} {:<28} {}",
                    compiler.id(),
                    compiler.label(),
                    compiler.file_name(&context)
                );
            }
        }
        Command::Export {
            format,
            out_dir,
            stdout,
        } => {
            validate_if_configured(&config)?;
            let context = ExportContext::now();
            if stdout {
                dispatch(&format, registry(), &context, &StdoutSink)?;
            } else {
                let sink = DirectorySink::new(out_dir.unwrap_or_else(|| config.output_dir()));
                let saved = dispatch(&format, registry(), &context, &sink)?;
                report(&config, &[saved]);
            }
        }
        Command::ExportAll { out_dir } => {
            validate_if_configured(&config)?;
            let sink = DirectorySink::new(out_dir.unwrap_or_else(|| config.output_dir()));
            let saved = export_all(registry(), &ExportContext::now(), &sink)?;
            report(&config, &saved);
        }
        Command::Validate => match registry::validate(registry()) {
            Ok(()) => println!("registry ok: {} tokens", registry().counts().total),
            Err(err) => {
                for defect in &err.defects {
                    println!("{defect}");
                }
                return Err(err.into());
            }
        },
        Command::Stats => {
            let counts = serde_json::to_value(registry().counts())?;
            if let Some(map) = counts.as_object() {
                for (category, count) in map {
                    println!("{category:<18} {count}");
                }
            }
        }
    }

    Ok(())
}

fn validate_if_configured(config: &AppConfig) -> AppResult<()> {
    if config.validate_before_export {
        registry::validate(registry())?;
    }
    Ok(())
}

fn report(config: &AppConfig, saved: &[SavedExport]) {
    for export in saved {
        if let Some(path) = &export.path {
            println!("{}", path.display());
        }
    }
    if config.notify_on_export && !saved.is_empty() {
        let names: Vec<_> = saved.iter().map(|export| export.file_name.as_str()).collect();
        notification::send(names.join("\n"));
    }
}
