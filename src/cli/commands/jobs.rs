//! sg jobs - Generate job search links for a skill set.

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_robot, robot_ok, HumanLayout};
use crate::error::Result;
use crate::jobs;
use crate::vocab;

#[derive(Args, Debug)]
pub struct JobsArgs {
    /// Comma-separated list of skills to search with
    #[arg(long, default_value = "")]
    pub skills: String,

    /// Role to search for (defaults to config)
    #[arg(long)]
    pub role: Option<String>,

    /// Maximum number of links (defaults to config)
    #[arg(long)]
    pub limit: Option<u32>,
}

pub fn run(ctx: &AppContext, args: &JobsArgs) -> Result<()> {
    let skills = vocab::parse_skill_list(&args.skills);
    let role = ctx.resolve_target_role(args.role.as_deref());
    let limit = args.limit.unwrap_or(ctx.config.jobs.max_links) as usize;

    let links = jobs::job_links(&skills, &role, limit);

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "role": role,
            "count": links.len(),
            "jobs": links,
        })));
    }

    let mut layout = HumanLayout::new();
    layout.title(&format!("Job Searches for {role}"));
    for link in &links {
        layout.section(&link.title);
        layout.kv("Platform", &link.platform);
        layout.kv("Company", &link.company);
        layout.kv("Location", &link.location);
        layout.kv("URL", &link.url);
        layout.blank();
    }
    emit_human(layout);
    Ok(())
}
