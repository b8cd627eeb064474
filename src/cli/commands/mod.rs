//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::{Result, SkillGapError};

pub mod analyze;
pub mod boost;
pub mod canon;
pub mod completions;
pub mod graph;
pub mod jobs;
pub mod reconcile;
pub mod roadmap;
pub mod trends;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::run(ctx, args),
        Commands::Reconcile(args) => reconcile::run(ctx, args),
        Commands::Boost(args) => boost::run(ctx, args),
        Commands::Canon(args) => canon::run(ctx, args),
        Commands::Graph(args) => graph::run(ctx, args),
        Commands::Roadmap(args) => roadmap::run(ctx, args),
        Commands::Jobs(args) => jobs::run(ctx, args),
        Commands::Trends(args) => trends::run(ctx, args),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Read and parse a JSON input file, with the path in any error.
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| SkillGapError::InvalidInput(format!("read {}: {err}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|err| SkillGapError::InvalidInput(format!("parse {}: {err}", path.display())))
}
