//! sg trends - Classify market trends against a skill profile.

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_robot, robot_ok, HumanLayout};
use crate::error::Result;
use crate::evidence::EvidenceMap;
use crate::report;
use crate::trends::{self, SkillStatus, Trend};
use crate::vocab;

#[derive(Args, Debug)]
pub struct TrendsArgs {
    /// Comma-separated list of claimed skills
    #[arg(long, default_value = "")]
    pub skills: String,

    /// Skill evidence JSON file (skill name to usage data)
    #[arg(long)]
    pub evidence: Option<PathBuf>,

    /// Trend list JSON file (defaults to the built-in list)
    #[arg(long)]
    pub trends: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &TrendsArgs) -> Result<()> {
    let claimed = vocab::parse_skill_list(&args.skills);
    let detected = match &args.evidence {
        Some(path) => super::read_json_file::<EvidenceMap>(path)?,
        None => EvidenceMap::new(),
    };
    let trend_list = match &args.trends {
        Some(path) => super::read_json_file::<Vec<Trend>>(path)?,
        None => trends::fallback_trends(),
    };

    // Reuse the reconciliation to split claims into verified and
    // evidence-free before classifying.
    let reconciliation = report::build_report(claimed.iter().map(String::as_str), &detected);
    let detected_names: Vec<String> = detected.keys().map(vocab::canonicalize).collect();

    let classified = trends::classify_trends(
        trend_list,
        &claimed,
        &detected_names,
        &reconciliation.verified_skills,
        &reconciliation.claimed_no_evidence_skills,
    );

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "count": classified.len(),
            "trends": classified,
        })));
    }

    let mut layout = HumanLayout::new();
    layout.title("Market Trends");
    for entry in &classified {
        let marker = match entry.skill_status {
            SkillStatus::Verified => "[have]",
            SkillStatus::ClaimedNoEvidence => "[claimed]",
            SkillStatus::NotLearned => "[learn]",
        };
        layout.kv(
            &entry.trend.skill,
            &format!("{marker} {}", entry.trend.description),
        );
    }
    emit_human(layout);
    Ok(())
}
