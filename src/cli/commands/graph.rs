//! sg graph - Inspect the skill dependency graph.

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_robot, robot_ok, HumanLayout};
use crate::error::{Result, SkillGapError};
use crate::graph;
use crate::vocab;

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Show prerequisites for one skill instead of the whole graph
    pub skill: Option<String>,
}

pub fn run(ctx: &AppContext, args: &GraphArgs) -> Result<()> {
    match &args.skill {
        Some(skill) => show_skill(ctx, skill),
        None => show_all(ctx),
    }
}

fn show_skill(ctx: &AppContext, skill: &str) -> Result<()> {
    let Some((parent, children)) = graph::find_parent(skill) else {
        return Err(SkillGapError::NotFound(format!(
            "no dependency entry for {}",
            vocab::canonicalize(skill)
        )));
    };

    if ctx.robot_mode {
        let deps: Vec<_> = children
            .iter()
            .map(|(name, factor)| serde_json::json!({"skill": name, "factor": factor}))
            .collect();
        return emit_robot(&robot_ok(serde_json::json!({
            "skill": parent,
            "dependencies": deps,
        })));
    }

    let mut layout = HumanLayout::new();
    layout.title(parent);
    layout.section("Prerequisites");
    for (name, factor) in children {
        layout.kv(name, &format!("factor {factor:.2}"));
    }
    emit_human(layout);
    Ok(())
}

fn show_all(ctx: &AppContext) -> Result<()> {
    let edges = graph::all_edges();

    if ctx.robot_mode {
        let entries: Vec<_> = edges
            .iter()
            .map(|(parent, children)| {
                let deps: Vec<_> = children
                    .iter()
                    .map(|(name, factor)| serde_json::json!({"skill": name, "factor": factor}))
                    .collect();
                serde_json::json!({"skill": parent, "dependencies": deps})
            })
            .collect();
        return emit_robot(&robot_ok(serde_json::json!({
            "count": edges.len(),
            "graph": entries,
        })));
    }

    let mut layout = HumanLayout::new();
    layout.title("Skill Dependency Graph");
    for (parent, children) in edges {
        let summary: Vec<String> = children
            .iter()
            .map(|(name, factor)| format!("{name} ({factor:.2})"))
            .collect();
        layout.kv(parent, &summary.join(", "));
    }
    emit_human(layout);
    Ok(())
}
