//! Configuration loader
//!
//! Merges built-in defaults, a TOML file and `PSW__`-prefixed environment
//! variables into an [`AppConfig`], then validates the result.

use crate::config::{AppConfig, FlowMode, LoggingConfig, ServerConfig};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use psw_domain::error::{Error, Result};
use psw_domain::value_objects::PathComponent;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Later sources override earlier ones:
    /// 1. `AppConfig::default()`
    /// 2. the TOML file given with [`with_config_path`](Self::with_config_path),
    ///    or the first `psw.toml` found in the default locations
    /// 3. environment variables such as `PSW__SERVER__PORT`
    ///
    /// Nested keys are separated by a double underscore so that field names
    /// like `search_socket` survive intact.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(config_path) if config_path.exists() => {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            }
            Some(config_path) => log_config_loaded(config_path, false),
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .io_context(format!("Failed to write {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate every configuration section
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_backend_config(config)?;
    validate_search_config(config)?;
    validate_flow_config(config)?;
    validate_slicer_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_backend_config(config: &AppConfig) -> Result<()> {
    let paths = [
        ("Search socket", &config.backend.search_socket),
        ("Flow socket", &config.backend.flow_socket),
        ("Capture directory", &config.backend.pcap_dir),
    ];
    if let Some((name, _)) = paths.iter().find(|(_, path)| path.as_os_str().is_empty()) {
        return Err(Error::configuration(format!("{name} path cannot be empty")));
    }
    // An empty default searches every service
    let service = &config.backend.default_service;
    if !service.is_empty() {
        PathComponent::parse(service).map_err(|err| {
            Error::configuration(format!("Invalid default service '{service}': {err}"))
        })?;
    }
    if config.backend.search_timeout_secs == 0 {
        return Err(Error::configuration("Search timeout cannot be 0"));
    }
    Ok(())
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    if config.search.page_size == 0 {
        return Err(Error::configuration("Search page size cannot be 0"));
    }
    if config.search.max_pages == 0 {
        return Err(Error::configuration("Maximum page count cannot be 0"));
    }
    Ok(())
}

fn validate_flow_config(config: &AppConfig) -> Result<()> {
    if config.flow.mode == FlowMode::Subprocess && config.flow.context_command.is_empty() {
        return Err(Error::configuration(
            "Context command cannot be empty when flow mode is subprocess",
        ));
    }
    if config.flow.lookup_timeout_ms == 0 {
        return Err(Error::configuration("Flow lookup timeout cannot be 0"));
    }
    Ok(())
}

fn validate_slicer_config(config: &AppConfig) -> Result<()> {
    if config.slicer.command.is_empty() {
        return Err(Error::configuration("Slicer command cannot be empty"));
    }
    if config.slicer.timeout_secs == 0 {
        return Err(Error::configuration("Slicer timeout cannot be 0"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set server configuration
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Point the backends at a capture tree and daemon sockets
    pub fn with_backend_paths(
        mut self,
        pcap_dir: impl Into<PathBuf>,
        search_socket: impl Into<PathBuf>,
        flow_socket: impl Into<PathBuf>,
    ) -> Self {
        self.config.backend.pcap_dir = pcap_dir.into();
        self.config.backend.search_socket = search_socket.into();
        self.config.backend.flow_socket = flow_socket.into();
        self
    }

    /// Set the slicing program
    pub fn with_slicer_command(mut self, command: Vec<String>) -> Self {
        self.config.slicer.command = command;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
