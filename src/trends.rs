//! Trending-skill classification.
//!
//! Marks each trending skill with whether the developer already has it,
//! claims it without evidence, or has yet to learn it. Comparison uses
//! loose containment so "React" credits a "React Native" detection.

use serde::{Deserialize, Serialize};

use crate::vocab;

/// Trend direction for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendKind {
    Hot,
    Rising,
    Stable,
}

/// One trending skill, as supplied upstream or by [`fallback_trends`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    pub skill: String,
    pub trend: TrendKind,
    pub description: String,
}

/// Possession status of a trending skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStatus {
    Verified,
    ClaimedNoEvidence,
    NotLearned,
}

/// A trend annotated with possession status.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedTrend {
    #[serde(flatten)]
    pub trend: Trend,
    pub has_skill: bool,
    pub skill_status: SkillStatus,
    pub status_message: &'static str,
}

/// Classify each trend against the developer's skill sets.
///
/// Evidence beats claims: any detected or verified match reads Verified;
/// a claim without detection reads ClaimedNoEvidence; everything else is
/// NotLearned. All comparisons use [`vocab::loose_contains`].
#[must_use]
pub fn classify_trends(
    trends: Vec<Trend>,
    claimed: &[String],
    detected: &[String],
    verified: &[String],
    claimed_no_evidence: &[String],
) -> Vec<ClassifiedTrend> {
    trends
        .into_iter()
        .map(|trend| {
            let name = trend.skill.as_str();
            let in_github = detected.iter().any(|s| vocab::loose_contains(name, s));
            let is_claimed = claimed.iter().any(|s| vocab::loose_contains(name, s));
            let is_verified = verified.iter().any(|s| vocab::loose_contains(name, s));
            let no_evidence = claimed_no_evidence
                .iter()
                .any(|s| vocab::loose_contains(name, s));

            let (has_skill, skill_status, status_message) = if is_verified || in_github {
                (
                    true,
                    SkillStatus::Verified,
                    "You already have this skill (verified in GitHub)",
                )
            } else if no_evidence || is_claimed {
                (
                    true,
                    SkillStatus::ClaimedNoEvidence,
                    "Claimed but no evidence found in GitHub",
                )
            } else {
                (false, SkillStatus::NotLearned, "Consider learning this skill")
            };

            ClassifiedTrend {
                trend,
                has_skill,
                skill_status,
                status_message,
            }
        })
        .collect()
}

/// Static trend list used when no upstream trend source exists.
#[must_use]
pub fn fallback_trends() -> Vec<Trend> {
    let entries: &[(&str, TrendKind, &str)] = &[
        (
            "Artificial Intelligence",
            TrendKind::Hot,
            "AI integration is becoming essential across all tech roles",
        ),
        (
            "Cloud Computing",
            TrendKind::Hot,
            "Cloud platforms like AWS, Azure are industry standard",
        ),
        (
            "TypeScript",
            TrendKind::Rising,
            "Type-safe JavaScript for large-scale applications",
        ),
        (
            "React",
            TrendKind::Stable,
            "Most popular frontend framework for modern web apps",
        ),
        (
            "Docker",
            TrendKind::Rising,
            "Container orchestration for scalable deployments",
        ),
        (
            "Python",
            TrendKind::Stable,
            "Versatile language for web dev, data science, and AI",
        ),
        (
            "GraphQL",
            TrendKind::Rising,
            "Modern API query language gaining adoption",
        ),
        (
            "Next.js",
            TrendKind::Hot,
            "Full-stack React framework with server-side rendering",
        ),
        (
            "Cyber Security",
            TrendKind::Hot,
            "Security skills are critical as threats increase",
        ),
        (
            "System Design",
            TrendKind::Stable,
            "Architectural skills for scalable systems",
        ),
    ];
    entries
        .iter()
        .map(|(skill, trend, description)| Trend {
            skill: (*skill).to_string(),
            trend: *trend,
            description: (*description).to_string(),
        })
        .collect()
}
