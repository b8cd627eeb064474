//! sg analyze - Full pipeline: estimates, dependency boost, reconciliation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::evidence::{self, EstimateSet, EvidenceMap};
use crate::graph;
use crate::report;
use crate::vocab;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Skill evidence JSON file (skill name to usage data)
    #[arg(long)]
    pub evidence: PathBuf,

    /// Estimator output JSON file (skill name to proficiency/reasoning)
    #[arg(long)]
    pub estimates: Option<PathBuf>,

    /// Comma-separated list of claimed skills
    #[arg(long, default_value = "")]
    pub skills: String,

    /// Skip the estimator and re-score every skill with a fallback formula
    #[arg(long, value_enum)]
    pub fallback: Option<FallbackKind>,

    /// Primary skill excluded from the extra-skills list
    #[arg(long)]
    pub primary_skill: Option<String>,
}

/// Wholesale re-scoring strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FallbackKind {
    /// Project count and byte volume, capped at 75
    Quick,
    /// Repository size weighting, capped at 80
    RepoSize,
}

pub fn run(ctx: &AppContext, args: &AnalyzeArgs) -> Result<()> {
    let raw = super::read_json_file::<EvidenceMap>(&args.evidence)?;
    let primary_skill = ctx.resolve_primary_skill(args.primary_skill.as_deref());

    let scored = score_evidence(args, &raw, &primary_skill)?;
    let boosted = graph::apply_dependency_boost(&scored, &primary_skill);

    let claimed = vocab::parse_skill_list(&args.skills);
    let reconciliation = report::build_report(claimed.iter().map(String::as_str), &boosted);

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "primary_skill": primary_skill,
            "skills": boosted,
            "report": reconciliation,
        })));
    }

    let mut layout = super::reconcile::report_layout(&reconciliation);
    if let Some(extras) = boosted.extra_skills() {
        layout.section("Extra skills found");
        for name in extras {
            layout.bullet(name);
        }
    }
    emit_human(layout);
    Ok(())
}

/// Pick the scoring pass: an explicit fallback flag wins, then a provided
/// estimator file, then a per-entry quick fill for unscored skills.
fn score_evidence(
    args: &AnalyzeArgs,
    raw: &EvidenceMap,
    primary_skill: &str,
) -> Result<EvidenceMap> {
    match args.fallback {
        Some(FallbackKind::Quick) => Ok(evidence::apply_estimates(raw, None, primary_skill)),
        Some(FallbackKind::RepoSize) => Ok(evidence::apply_repo_size_fallback(raw)),
        None => match &args.estimates {
            Some(path) => {
                let estimates = super::read_json_file::<EstimateSet>(path)?;
                Ok(evidence::apply_estimates(
                    raw,
                    Some(&estimates),
                    primary_skill,
                ))
            }
            None => Ok(evidence::fill_missing_estimates(raw)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::evidence::SkillEvidence;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: AnalyzeArgs,
    }

    fn args_from(argv: &[&str]) -> AnalyzeArgs {
        TestCli::parse_from(argv).args
    }

    #[test]
    fn parse_analyze_flags() {
        let args = args_from(&[
            "test",
            "--evidence",
            "/tmp/evidence.json",
            "--estimates",
            "/tmp/estimates.json",
            "--skills",
            "react",
            "--fallback",
            "repo-size",
        ]);
        assert_eq!(args.fallback, Some(FallbackKind::RepoSize));
        assert_eq!(args.skills, "react");
        assert!(args.estimates.is_some());
    }

    #[test]
    fn quick_fallback_rescoring_ignores_existing_scores() {
        let args = args_from(&["test", "--evidence", "e.json", "--fallback", "quick"]);
        let mut raw = EvidenceMap::new();
        raw.insert(
            "Python",
            SkillEvidence::from_counts(27_000, 3).with_proficiency(70, "existing"),
        );

        let scored = score_evidence(&args, &raw, "React").unwrap();
        let python = scored.get("Python").unwrap();
        // 3 * 12 + 27000 / 9000 = 39
        assert_eq!(python.proficiency, Some(39));
        assert_eq!(python.reasoning.as_deref(), Some("Auto fallback estimation"));
    }

    #[test]
    fn default_path_only_fills_missing_scores() {
        let args = args_from(&["test", "--evidence", "e.json"]);
        let mut raw = EvidenceMap::new();
        raw.insert(
            "Python",
            SkillEvidence::from_counts(27_000, 3).with_proficiency(70, "existing"),
        );
        raw.insert("Rust", SkillEvidence::from_counts(27_000, 3));

        let scored = score_evidence(&args, &raw, "React").unwrap();
        assert_eq!(scored.get("Python").unwrap().proficiency, Some(70));
        assert_eq!(scored.get("Rust").unwrap().proficiency, Some(39));
    }

    #[test]
    fn repo_size_fallback_uses_size_formula() {
        let args = args_from(&["test", "--evidence", "e.json", "--fallback", "repo-size"]);
        let mut raw = EvidenceMap::new();
        raw.insert("Go", SkillEvidence::from_counts(16_000, 1));

        let scored = score_evidence(&args, &raw, "React").unwrap();
        // min(1 * 10, 40) + min(16000 / 8000, 35) = 12
        assert_eq!(scored.get("Go").unwrap().proficiency, Some(12));
        assert_eq!(
            scored.get("Go").unwrap().reasoning.as_deref(),
            Some("Fallback based on repo size")
        );
    }
}
