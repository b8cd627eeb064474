//! sg boost - Apply the dependency boost to a skill evidence map.

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_robot, robot_ok, HumanLayout};
use crate::error::Result;
use crate::evidence::EvidenceMap;
use crate::graph;

#[derive(Args, Debug)]
pub struct BoostArgs {
    /// Skill evidence JSON file (skill name to usage data)
    #[arg(long)]
    pub evidence: PathBuf,

    /// Primary skill excluded from the extra-skills list
    #[arg(long)]
    pub primary_skill: Option<String>,
}

pub fn run(ctx: &AppContext, args: &BoostArgs) -> Result<()> {
    let raw = super::read_json_file::<EvidenceMap>(&args.evidence)?;
    let primary_skill = ctx.resolve_primary_skill(args.primary_skill.as_deref());
    let boosted = graph::apply_dependency_boost(&raw, &primary_skill);

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "primary_skill": primary_skill,
            "skills": boosted,
        })));
    }

    let mut layout = HumanLayout::new();
    layout.title("Dependency Boost");
    for (skill, data) in boosted.iter() {
        let score = data
            .proficiency
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        let detail = match &data.reasoning {
            Some(reasoning) => format!("{score}  {reasoning}"),
            None => score,
        };
        layout.kv(skill, &detail);
    }
    if let Some(extras) = boosted.extra_skills() {
        layout.blank();
        layout.section("Extra skills found");
        for name in extras {
            layout.bullet(name);
        }
    }
    emit_human(layout);
    Ok(())
}
