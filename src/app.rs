//! Shared application context threaded through every command.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::vocab;

/// Loaded configuration plus the effective output mode.
pub struct AppContext {
    pub config: Config,
    /// JSON output for machine consumption.
    pub robot_mode: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let robot_mode = cli.robot || config.output.format == "json";
        Ok(Self { config, robot_mode })
    }

    /// Primary skill for a command: an explicit flag wins over config,
    /// both spelled canonically.
    #[must_use]
    pub fn resolve_primary_skill(&self, flag: Option<&str>) -> String {
        flag.map_or_else(|| self.config.primary_skill(), vocab::canonicalize)
    }

    /// Target role for a command: an explicit flag wins over config.
    #[must_use]
    pub fn resolve_target_role(&self, flag: Option<&str>) -> String {
        flag.map_or_else(|| self.config.analysis.target_role.clone(), str::to_string)
    }
}
