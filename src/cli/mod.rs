//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// skillgap - Reconcile claimed skills against repository evidence
#[derive(Parser, Debug)]
#[command(name = "sg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output for machine consumption
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/skillgap/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: estimates, dependency boost, reconciliation
    Analyze(commands::analyze::AnalyzeArgs),

    /// Reconcile claimed skills against detected evidence
    Reconcile(commands::reconcile::ReconcileArgs),

    /// Apply the dependency boost to a skill evidence map
    Boost(commands::boost::BoostArgs),

    /// Canonicalize skill names and check fuzzy matches
    Canon(commands::canon::CanonArgs),

    /// Inspect the skill dependency graph
    Graph(commands::graph::GraphArgs),

    /// Generate a learning roadmap with course suggestions
    Roadmap(commands::roadmap::RoadmapArgs),

    /// Generate job search links for a skill set
    Jobs(commands::jobs::JobsArgs),

    /// Classify market trends against a skill profile
    Trends(commands::trends::TrendsArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
