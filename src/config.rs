use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SkillGapError};
use crate::vocab;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub jobs: JobsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration: defaults, overlaid with the global config file
    /// (or an explicit path / `SG_CONFIG`), then `SG_*` env overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SG_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                debug!(path = %path.display(), "loaded explicit config");
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("skillgap/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SkillGapError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| SkillGapError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.analysis {
            self.analysis.merge(patch);
        }
        if let Some(patch) = patch.jobs {
            self.jobs.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("SG_PRIMARY_SKILL") {
            self.analysis.primary_skill = value;
        }
        if let Some(value) = env_string("SG_TARGET_ROLE") {
            self.analysis.target_role = value;
        }
        if let Some(value) = env_u32("SG_JOBS_MAX_LINKS")? {
            self.jobs.max_links = value;
        }
        if let Some(value) = env_string("SG_OUTPUT_FORMAT") {
            self.output.format = value;
        }
        if env_bool("SG_ROBOT").unwrap_or(false) {
            self.output.format = "json".to_string();
        }
        Ok(())
    }

    /// Canonical spelling of the configured primary skill.
    #[must_use]
    pub fn primary_skill(&self) -> String {
        vocab::canonicalize(&self.analysis.primary_skill)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Skill excluded from the reserved extra-skills list.
    #[serde(default = "default_primary_skill")]
    pub primary_skill: String,
    /// Target role used when a command is not given one.
    #[serde(default = "default_target_role")]
    pub target_role: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            primary_skill: default_primary_skill(),
            target_role: default_target_role(),
        }
    }
}

impl AnalysisConfig {
    fn merge(&mut self, patch: AnalysisPatch) {
        if let Some(value) = patch.primary_skill {
            self.primary_skill = value;
        }
        if let Some(value) = patch.target_role {
            self.target_role = value;
        }
    }
}

fn default_primary_skill() -> String {
    "React".to_string()
}

fn default_target_role() -> String {
    "Full Stack Developer".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    /// Upper bound on generated job links.
    #[serde(default = "default_max_links")]
    pub max_links: u32,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            max_links: default_max_links(),
        }
    }
}

impl JobsConfig {
    fn merge(&mut self, patch: JobsPatch) {
        if let Some(value) = patch.max_links {
            self.max_links = value;
        }
    }
}

fn default_max_links() -> u32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format when no flag is given: "human" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub analysis: Option<AnalysisPatch>,
    pub jobs: Option<JobsPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AnalysisPatch {
    pub primary_skill: Option<String>,
    pub target_role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct JobsPatch {
    pub max_links: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_u32(key: &str) -> Result<Option<u32>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|err| SkillGapError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
