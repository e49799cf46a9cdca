//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::{self, Cli, Commands};
use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};
use std::path::PathBuf;

/// Configuration merger that handles CLI argument integration with file-based configuration
///
/// This struct implements the configuration precedence logic where CLI arguments
/// override configuration file values.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger by loading the base configuration,
    /// honoring the CLI config-dir and environment overrides
    ///
    /// # Arguments
    /// * `config_dir` - Optional configuration directory. If None, uses default loader behavior
    /// * `environment` - Optional environment override
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli_sources(
        config_dir: Option<&PathBuf>,
        environment: Option<parser::Environment>,
    ) -> Result<Self, ConfigError> {
        let config = Self::load_base_config(config_dir, environment)?;
        Ok(Self::new(config))
    }

    /// Validate that the configuration directory is accessible
    fn validate_config_dir_access(path: &PathBuf) -> Result<(), ConfigError> {
        // Check if directory exists
        if !path.exists() {
            return Err(ConfigError::ValidationError {
                field: "config_dir".to_string(),
                message: format!(
                    "Configuration directory does not exist: '{}'",
                    path.display()
                ),
            });
        }

        // Check if it's a directory (not a file)
        if !path.is_dir() {
            return Err(ConfigError::ValidationError {
                field: "config_dir".to_string(),
                message: format!("Configuration path is not a directory: '{}'", path.display()),
            });
        }

        Ok(())
    }

    /// Load the base configuration with CLI source overrides applied
    ///
    /// The loader reads its sources from environment variables, so the CLI
    /// overrides are passed through them for the duration of the load.
    fn load_base_config(
        config_dir: Option<&PathBuf>,
        environment: Option<parser::Environment>,
    ) -> Result<Settings, ConfigError> {
        if let Some(dir) = config_dir {
            Self::validate_config_dir_access(dir)?;
            unsafe {
                std::env::set_var("SPACEPORT_CONFIG_DIR", dir);
            }
        }
        if let Some(env) = environment {
            let app_env: AppEnvironment = env.into();
            unsafe {
                std::env::set_var(AppEnvironment::ENV_VAR, app_env.as_str());
            }
        }

        let result = ConfigLoader::new().and_then(|loader| loader.load());

        // Clean up the override variables
        if config_dir.is_some() {
            unsafe {
                std::env::remove_var("SPACEPORT_CONFIG_DIR");
            }
        }
        if environment.is_some() {
            unsafe {
                std::env::remove_var(AppEnvironment::ENV_VAR);
            }
        }

        result
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// This method applies CLI argument overrides according to the precedence rules:
    /// 1. CLI arguments have highest priority
    /// 2. Configuration file values are used as base
    ///
    /// # Arguments
    /// * `cli` - Parsed CLI arguments
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        // Apply global CLI overrides
        self.apply_global_overrides(&mut config, cli);

        // Apply command-specific overrides
        if let Some(ref command) = cli.command {
            self.apply_command_overrides(&mut config, command);
        }

        // Validate the merged configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply global CLI argument overrides
    fn apply_global_overrides(&self, config: &mut Settings, cli: &Cli) {
        // Apply logging level overrides from global flags
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    /// Apply command-specific CLI argument overrides
    fn apply_command_overrides(&self, config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                dry_run: _,
            } => {
                // Override server host if provided
                if let Some(host_addr) = host {
                    config.server.host = host_addr.clone();
                }

                // Override server port if provided
                if let Some(port_num) = port {
                    config.server.port = *port_num;
                }

                // Override log level if provided (command-specific override takes precedence over global)
                if let Some(level) = log_level {
                    config.logger.level = (*level).into();
                }
            }
        }
    }

    /// Get the current configuration (useful for inspection)
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
