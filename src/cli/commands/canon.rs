//! sg canon - Canonicalize skill names and check fuzzy matches.

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_robot, robot_ok, HumanLayout};
use crate::error::Result;
use crate::vocab;

#[derive(Args, Debug)]
pub struct CanonArgs {
    /// Skill names to canonicalize
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Also report whether each name fuzzy-matches this skill
    #[arg(long)]
    pub against: Option<String>,
}

#[derive(Serialize)]
struct CanonEntry {
    input: String,
    canonical: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<bool>,
}

pub fn run(ctx: &AppContext, args: &CanonArgs) -> Result<()> {
    let entries: Vec<CanonEntry> = args
        .names
        .iter()
        .map(|name| CanonEntry {
            input: name.clone(),
            canonical: vocab::canonicalize(name),
            matches: args
                .against
                .as_deref()
                .map(|against| vocab::skills_match(name, against)),
        })
        .collect();

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "against": args.against,
            "names": entries,
        })));
    }

    let mut layout = HumanLayout::new();
    layout.title("Canonical Names");
    for entry in &entries {
        let verdict = match entry.matches {
            Some(true) => "  matches",
            Some(false) => "  no match",
            None => "",
        };
        layout.kv(&entry.input, &format!("{}{verdict}", entry.canonical));
    }
    emit_human(layout);
    Ok(())
}
