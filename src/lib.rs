pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod evidence;
pub mod graph;
pub mod jobs;
pub mod report;
pub mod roadmap;
pub mod trends;
pub mod vocab;

pub use error::{Result, SkillGapError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
