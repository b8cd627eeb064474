//! sg roadmap - Generate a learning roadmap with course suggestions.

use clap::Args;
use itertools::Itertools;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_robot, robot_ok, HumanLayout};
use crate::error::Result;
use crate::roadmap;
use crate::vocab;

#[derive(Args, Debug)]
pub struct RoadmapArgs {
    /// Comma-separated list of current skills
    #[arg(long, default_value = "")]
    pub skills: String,

    /// Role the roadmap should lead to (defaults to config)
    #[arg(long)]
    pub target_role: Option<String>,
}

pub fn run(ctx: &AppContext, args: &RoadmapArgs) -> Result<()> {
    let skills = vocab::parse_skill_list(&args.skills);
    let target_role = ctx.resolve_target_role(args.target_role.as_deref());

    let mut plan = roadmap::fallback_roadmap(&skills, &target_role);
    roadmap::enrich_with_courses(&mut plan);

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "roadmap": plan,
        })));
    }

    let mut layout = HumanLayout::new();
    layout.title(&format!("Roadmap toward {}", plan.target_position));
    layout.kv("Starting from", &plan.current_position);
    layout.blank();

    for path in &plan.paths {
        layout.section(&path.path_name);
        layout.push_line(path.description.clone());
        layout.kv("Difficulty", path.difficulty.as_str());
        layout.kv("Timeline", &path.timeline);
        for step in &path.steps {
            layout.bullet(&format!(
                "{}. {} ({})",
                step.step_number, step.title, step.estimated_time
            ));
            layout.push_line(format!("    learn: {}", step.skills_to_learn.iter().join(", ")));
            for course in &step.courses {
                layout.push_line(format!("    {} ({})", course.name, course.platform));
            }
        }
        layout.blank();
    }

    layout.section("Required skills");
    for skill in &plan.required_skills {
        layout.bullet(skill);
    }
    layout.blank();
    layout.section("Optional skills");
    for skill in &plan.optional_skills {
        layout.bullet(skill);
    }
    emit_human(layout);
    Ok(())
}
