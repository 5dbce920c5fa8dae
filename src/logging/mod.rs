pub mod config;
pub mod context;
pub mod layers;

pub use context::{detect_context, ExecutionContext};
pub use layers::console::ConsoleOutput;

use crate::cli::Args;
use crate::logging::config::LoggingConfig;
use crate::logging::layers::{console, file};
use crate::Result;
use anyhow::{anyhow, Context};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Guards that keep logging sinks active for the duration of the command.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
    console_output: ConsoleOutput,
    log_file_path: Option<PathBuf>,
}

impl LoggingGuard {
    /// Returns the console output configuration used during initialization.
    pub fn console_output(&self) -> ConsoleOutput {
        self.console_output
    }

    /// Returns the log file path when the file sink is enabled.
    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file_path.as_deref()
    }
}

/// Initialize the logging framework for the provided CLI invocation.
///
/// Filters come from `RUST_LOG` or the configured default level. The console
/// sink depends on the execution context and the file sink is opt-in. Errors
/// when invoked more than once per process.
pub fn init(args: &Args) -> Result<LoggingGuard> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let context = detect_context(&args.command);
    let workspace_root = args.workspace_root();
    let config = LoggingConfig::load(Some(&workspace_root))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_level))
        .context("failed to configure tracing level")?;
    let log_file_path = file::log_file_path(&config, Some(&workspace_root))?;

    type FileSubscriber = file::FileLayerStack<Registry>;

    let (file_layer, file_guard) =
        file::file_layer::<Registry>(&log_file_path, config.enable_file)?;
    let console_output = console::select_console_output(context, config.console_output);
    let console_layer = console::console_layer::<FileSubscriber>(console_output);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(env_filter)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
        console_output,
        log_file_path: config.enable_file.then_some(log_file_path),
    })
}
