//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output with multiple formats (Full, Compact, JSON)
//!
//! The file sink is a plain append or truncate handle. Log rotation is
//! left to external tooling such as logrotate.

pub mod config;

// Re-export main types
pub use config::*;

use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize the logger with the given configuration
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    // Create filter from level string
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    match (config.console.enabled, config.file.enabled) {
        (true, true) => init_both(&config, filter),
        (true, false) => init_console_only(&config, filter),
        (false, true) => init_file_only(&config, filter),
        (false, false) => {
            anyhow::bail!("At least one output (console or file) must be enabled")
        }
    }
}

fn init_console_only(config: &LoggerConfig, filter: EnvFilter) -> anyhow::Result<()> {
    let use_ansi = config.console.colored && std::io::stdout().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(use_ansi).with_target(true))
        .init();

    Ok(())
}

fn init_file_only(config: &LoggerConfig, filter: EnvFilter) -> anyhow::Result<()> {
    let writer = open_log_file(&config.file)?;

    let registry = tracing_subscriber::registry().with(filter);

    match config.file.format {
        LogFormat::Full => {
            registry
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
        }
        LogFormat::Compact => {
            registry
                .with(fmt::layer().compact().with_writer(writer).with_ansi(false))
                .init();
        }
        LogFormat::Json => {
            registry
                .with(fmt::layer().json().with_writer(writer).with_ansi(false))
                .init();
        }
    }

    Ok(())
}

fn init_both(config: &LoggerConfig, filter: EnvFilter) -> anyhow::Result<()> {
    let writer = open_log_file(&config.file)?;
    let use_ansi = config.console.colored && std::io::stdout().is_terminal();

    let registry = tracing_subscriber::registry().with(filter);

    // The file layer must be registered before the console layer, otherwise
    // the console layer swallows events before they reach the file.
    // See: https://github.com/tokio-rs/tracing/issues/1817
    match config.file.format {
        LogFormat::Full => {
            registry
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(fmt::layer().with_ansi(use_ansi).with_target(true))
                .init();
        }
        LogFormat::Compact => {
            registry
                .with(fmt::layer().compact().with_writer(writer).with_ansi(false))
                .with(fmt::layer().with_ansi(use_ansi).with_target(true))
                .init();
        }
        LogFormat::Json => {
            registry
                .with(fmt::layer().json().with_writer(writer).with_ansi(false))
                .with(fmt::layer().with_ansi(use_ansi).with_target(true))
                .init();
        }
    }

    Ok(())
}

/// Open the log file, creating parent directories as needed
///
/// `Arc<File>` satisfies `MakeWriter` through the blanket impl for types
/// whose references implement `io::Write`.
fn open_log_file(config: &FileConfig) -> anyhow::Result<Arc<File>> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory: {}", parent.display())
            })?;
        }
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if config.append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    let file = options
        .open(&config.path)
        .with_context(|| format!("Failed to open log file: {}", config.path.display()))?;

    Ok(Arc::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn file_config(path: PathBuf, append: bool) -> FileConfig {
        FileConfig {
            enabled: true,
            path,
            append,
            format: LogFormat::Json,
        }
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("app.log");

        let config = file_config(path.clone(), true);
        let writer = open_log_file(&config).unwrap();
        drop(writer);

        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_append_preserves_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        std::fs::write(&path, "existing line\n").unwrap();

        let config = file_config(path.clone(), true);
        let writer = open_log_file(&config).unwrap();
        (&*writer).write_all(b"new line\n").unwrap();
        drop(writer);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("existing line\n"));
        assert!(contents.contains("new line\n"));
    }

    #[test]
    fn test_open_log_file_truncate_discards_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        std::fs::write(&path, "existing line\n").unwrap();

        let config = file_config(path.clone(), false);
        let writer = open_log_file(&config).unwrap();
        drop(writer);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_init_logger_rejects_disabled_outputs() {
        let config = LoggerConfig {
            console: ConsoleConfig {
                enabled: false,
                colored: false,
            },
            file: FileConfig {
                enabled: false,
                ..Default::default()
            },
            level: "info".to_string(),
        };

        assert!(init_logger(config).is_err());
    }
}
