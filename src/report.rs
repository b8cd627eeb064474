//! Skill reconciliation: merge claimed skills with detected evidence into a
//! classified, sorted report.
//!
//! Claimed skills verified against evidence keep their detected score;
//! claims without evidence score zero; detected skills nobody claimed are
//! appended as auto-detected. Every entry gets a qualitative level band.

use serde::Serialize;

use crate::evidence::EvidenceMap;
use crate::vocab;

/// Qualitative proficiency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ProficiencyLevel {
    Beginner,
    Elementary,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    /// Five-tier banding: [0,20) Beginner, [20,40) Elementary, [40,60)
    /// Intermediate, [60,80) Advanced, [80,100] Expert.
    #[must_use]
    pub fn from_score(proficiency: u8) -> Self {
        match proficiency {
            80.. => Self::Expert,
            60..=79 => Self::Advanced,
            40..=59 => Self::Intermediate,
            20..=39 => Self::Elementary,
            _ => Self::Beginner,
        }
    }

    /// Four-tier banding used for auto-detected skills: anything under 40
    /// reads Elementary, never Beginner.
    #[must_use]
    pub fn from_score_floored(proficiency: u8) -> Self {
        match Self::from_score(proficiency) {
            Self::Beginner => Self::Elementary,
            level => level,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Elementary => "Elementary",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reconciled skill.
#[derive(Debug, Clone, Serialize)]
pub struct SkillReport {
    pub name: String,
    pub proficiency: u8,
    pub level: ProficiencyLevel,
    pub evidence: Vec<String>,
    pub verified: bool,
    pub has_github_evidence: bool,
}

/// Legend mapping score ranges to band descriptions, carried alongside the
/// report for formatters.
#[derive(Debug, Clone, Serialize)]
pub struct ProficiencyScale {
    #[serde(rename = "0-19")]
    pub beginner: &'static str,
    #[serde(rename = "20-39")]
    pub elementary: &'static str,
    #[serde(rename = "40-59")]
    pub intermediate: &'static str,
    #[serde(rename = "60-79")]
    pub advanced: &'static str,
    #[serde(rename = "80-100")]
    pub expert: &'static str,
}

impl Default for ProficiencyScale {
    fn default() -> Self {
        Self {
            beginner: "Beginner - Just starting out",
            elementary: "Elementary - Basic understanding",
            intermediate: "Intermediate - Comfortable with basics",
            advanced: "Advanced - Strong practical knowledge",
            expert: "Expert - Mastery level proficiency",
        }
    }
}

/// Full reconciliation result: the sorted report plus classification
/// buckets. `github_verified_skills` aliases `verified_skills` and
/// `claimed_no_evidence_skills` aliases `unverified_skills`; both names are
/// kept because downstream consumers read both.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkillReconciliation {
    pub skills: Vec<SkillReport>,
    pub unverified_skills: Vec<String>,
    pub verified_skills: Vec<String>,
    pub github_verified_skills: Vec<String>,
    pub claimed_no_evidence_skills: Vec<String>,
    pub extra_detected_skills: Vec<String>,
    pub scale: ProficiencyScale,
}

/// Build the reconciliation report.
///
/// Claimed skills are canonicalized and de-duplicated case-insensitively in
/// input order, then matched against detected evidence with the fuzzy
/// matcher. Detected skills not covered by any claim are appended as
/// auto-detected entries (default proficiency 30 when the evidence carries
/// none). The final list is stably sorted by proficiency descending.
#[must_use]
pub fn build_report<'a, I>(claimed: I, detected: &EvidenceMap) -> SkillReconciliation
where
    I: IntoIterator<Item = &'a str>,
{
    // Re-key detected evidence canonically; collisions keep the first
    // position and the last value.
    let mut canonical_detected = EvidenceMap::new();
    for (key, data) in detected.iter() {
        canonical_detected.insert(vocab::canonicalize(key), data.clone());
    }

    let mut out = SkillReconciliation::default();
    let mut processed: Vec<String> = Vec::new();

    for skill in claimed {
        let canonical = vocab::canonicalize(skill);
        let normalized = vocab::normalize(&canonical);
        if processed.contains(&normalized) {
            continue;
        }
        processed.push(normalized);

        let matched = canonical_detected
            .keys()
            .find(|gh| vocab::skills_match(gh, &canonical))
            .map(str::to_string);

        let mut evidence = Vec::new();
        let (proficiency, verified) = match matched.as_deref().and_then(|k| canonical_detected.get(k)) {
            Some(g) => {
                evidence.push(format!("Verified in {} GitHub projects", g.project_count));
                if let Some(reasoning) = g.reasoning.as_deref().filter(|r| !r.is_empty()) {
                    evidence.push(reasoning.to_string());
                }
                out.verified_skills.push(canonical.clone());
                out.github_verified_skills.push(canonical.clone());
                (g.proficiency.unwrap_or(0), true)
            }
            None => {
                evidence.push("Claimed but no evidence found in GitHub repos".to_string());
                out.unverified_skills.push(canonical.clone());
                out.claimed_no_evidence_skills.push(canonical.clone());
                (0, false)
            }
        };

        out.skills.push(SkillReport {
            name: canonical,
            proficiency,
            level: ProficiencyLevel::from_score(proficiency),
            evidence,
            verified,
            has_github_evidence: verified,
        });
    }

    for (key, g) in canonical_detected.iter() {
        let canonical = vocab::canonicalize(key);
        let normalized = vocab::normalize(&canonical);
        if processed.contains(&normalized) {
            continue;
        }
        processed.push(normalized);

        let proficiency = g.proficiency.unwrap_or(30);
        let mut evidence =
            vec!["Auto-detected from GitHub - you didn't list this skill".to_string()];
        if let Some(reasoning) = g.reasoning.as_deref().filter(|r| !r.is_empty()) {
            evidence.push(reasoning.to_string());
        }

        out.skills.push(SkillReport {
            name: canonical.clone(),
            proficiency,
            level: ProficiencyLevel::from_score_floored(proficiency),
            evidence,
            verified: true,
            has_github_evidence: true,
        });
        out.extra_detected_skills.push(canonical);
    }

    // Stable: ties keep claimed-then-detected insertion order.
    out.skills.sort_by_key(|entry| std::cmp::Reverse(entry.proficiency));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::SkillEvidence;

    fn detected(entries: &[(&str, Option<u8>)]) -> EvidenceMap {
        entries
            .iter()
            .map(|(name, prof)| {
                let mut e = SkillEvidence::from_counts(9000, 2);
                if let Some(p) = prof {
                    e = e.with_proficiency(*p, "strong usage across repos");
                }
                ((*name).to_string(), e)
            })
            .collect()
    }

    #[test]
    fn level_banding_boundaries() {
        assert_eq!(ProficiencyLevel::from_score(0), ProficiencyLevel::Beginner);
        assert_eq!(ProficiencyLevel::from_score(19), ProficiencyLevel::Beginner);
        assert_eq!(ProficiencyLevel::from_score(20), ProficiencyLevel::Elementary);
        assert_eq!(ProficiencyLevel::from_score(39), ProficiencyLevel::Elementary);
        assert_eq!(ProficiencyLevel::from_score(40), ProficiencyLevel::Intermediate);
        assert_eq!(ProficiencyLevel::from_score(59), ProficiencyLevel::Intermediate);
        assert_eq!(ProficiencyLevel::from_score(60), ProficiencyLevel::Advanced);
        assert_eq!(ProficiencyLevel::from_score(79), ProficiencyLevel::Advanced);
        assert_eq!(ProficiencyLevel::from_score(80), ProficiencyLevel::Expert);
        assert_eq!(ProficiencyLevel::from_score(100), ProficiencyLevel::Expert);
    }

    #[test]
    fn floored_banding_never_says_beginner() {
        assert_eq!(ProficiencyLevel::from_score_floored(5), ProficiencyLevel::Elementary);
        assert_eq!(ProficiencyLevel::from_score_floored(30), ProficiencyLevel::Elementary);
        assert_eq!(ProficiencyLevel::from_score_floored(85), ProficiencyLevel::Expert);
    }

    #[test]
    fn duplicate_claims_collapse_to_one_entry() {
        let report = build_report(
            ["React", "react", "REACT "].iter().copied(),
            &EvidenceMap::new(),
        );
        assert_eq!(report.skills.len(), 1);
        assert_eq!(report.skills[0].name, "React");
    }

    #[test]
    fn claimed_with_evidence_is_verified() {
        let report = build_report(
            ["python"].iter().copied(),
            &detected(&[("Python", Some(70)), ("Django", Some(65))]),
        );

        let python = report.skills.iter().find(|s| s.name == "Python").unwrap();
        assert_eq!(python.proficiency, 70);
        assert_eq!(python.level, ProficiencyLevel::Advanced);
        assert!(python.verified);
        assert!(python.has_github_evidence);
        assert!(python.evidence[0].starts_with("Verified in"));
        assert_eq!(python.evidence[1], "strong usage across repos");

        let django = report.skills.iter().find(|s| s.name == "Django").unwrap();
        assert_eq!(django.proficiency, 65);
        assert_eq!(django.level, ProficiencyLevel::Advanced);
        assert!(django.verified);

        assert_eq!(report.verified_skills, vec!["Python"]);
        assert_eq!(report.github_verified_skills, vec!["Python"]);
        assert_eq!(report.extra_detected_skills, vec!["Django"]);
        assert!(report.unverified_skills.is_empty());
    }

    #[test]
    fn claimed_without_evidence_scores_zero() {
        let report = build_report(["Rust"].iter().copied(), &EvidenceMap::new());
        let rust = &report.skills[0];
        assert_eq!(rust.proficiency, 0);
        assert_eq!(rust.level, ProficiencyLevel::Beginner);
        assert!(!rust.verified);
        assert!(!rust.has_github_evidence);
        assert_eq!(
            rust.evidence,
            vec!["Claimed but no evidence found in GitHub repos".to_string()]
        );
        assert_eq!(report.unverified_skills, vec!["Rust"]);
        assert_eq!(report.claimed_no_evidence_skills, vec!["Rust"]);
    }

    #[test]
    fn auto_detected_defaults_to_thirty() {
        let report = build_report(std::iter::empty(), &detected(&[("Kotlin", None)]));
        let kotlin = &report.skills[0];
        assert_eq!(kotlin.proficiency, 30);
        assert_eq!(kotlin.level, ProficiencyLevel::Elementary);
        assert!(kotlin.verified);
        assert!(kotlin.evidence[0].starts_with("Auto-detected from GitHub"));
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let report = build_report(
            std::iter::empty(),
            &detected(&[("Vue", Some(50)), ("React", Some(70)), ("Svelte", Some(50))]),
        );
        let names: Vec<_> = report.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["React", "Vue", "Svelte"]);
    }

    #[test]
    fn substring_claim_verifies_and_keeps_detected_entry() {
        // Documented matcher tradeoff: "Java" pairs with "JavaScript" via
        // substring, so the claim verifies against JavaScript's evidence
        // while JavaScript itself still appears as auto-detected.
        let report = build_report(
            ["Java"].iter().copied(),
            &detected(&[("JavaScript", Some(60))]),
        );
        assert_eq!(report.skills.len(), 2);
        let java = report.skills.iter().find(|s| s.name == "Java").unwrap();
        assert!(java.verified);
        assert_eq!(java.proficiency, 60);
        assert_eq!(report.extra_detected_skills, vec!["JavaScript"]);
    }

    #[test]
    fn scale_rides_along_for_formatters() {
        let report = build_report(std::iter::empty(), &EvidenceMap::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["scale"]["40-59"],
            "Intermediate - Comfortable with basics"
        );
    }
}
