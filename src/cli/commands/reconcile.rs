//! sg reconcile - Reconcile claimed skills against detected evidence.

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_robot, robot_ok, HumanLayout};
use crate::error::Result;
use crate::evidence::EvidenceMap;
use crate::report::{self, SkillReconciliation};
use crate::vocab;

#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// Comma-separated list of claimed skills
    #[arg(long, default_value = "")]
    pub skills: String,

    /// Skill evidence JSON file (skill name to usage data)
    #[arg(long)]
    pub evidence: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &ReconcileArgs) -> Result<()> {
    let claimed = vocab::parse_skill_list(&args.skills);
    let detected = match &args.evidence {
        Some(path) => super::read_json_file::<EvidenceMap>(path)?,
        None => EvidenceMap::new(),
    };

    let reconciliation = report::build_report(claimed.iter().map(String::as_str), &detected);

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "report": reconciliation,
        })));
    }

    emit_human(report_layout(&reconciliation));
    Ok(())
}

/// Human rendering for a reconciliation report, shared with `sg analyze`.
pub(crate) fn report_layout(reconciliation: &SkillReconciliation) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Skill Reconciliation");

    layout.section("Skills");
    for skill in &reconciliation.skills {
        let mut tags = Vec::new();
        if skill.verified {
            tags.push("verified");
        }
        if skill.has_github_evidence {
            tags.push("github");
        }
        let suffix = if tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", tags.join(", "))
        };
        layout.kv(
            &skill.name,
            &format!("{:>3}  {}{suffix}", skill.proficiency, skill.level),
        );
    }
    layout.blank();

    bucket_section(&mut layout, "Verified", &reconciliation.verified_skills);
    bucket_section(
        &mut layout,
        "Claimed, no evidence",
        &reconciliation.claimed_no_evidence_skills,
    );
    bucket_section(
        &mut layout,
        "Extra detected",
        &reconciliation.extra_detected_skills,
    );

    layout
}

fn bucket_section(layout: &mut HumanLayout, heading: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    layout.section(heading);
    for name in names {
        layout.bullet(name);
    }
    layout.blank();
}
