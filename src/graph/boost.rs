//! One-pass dependency boost propagation.
//!
//! Knowing a framework well implies a floor of proficiency in its
//! prerequisites: a React score of 80 with a JavaScript factor of 0.60
//! guarantees JavaScript at least floor(80 * 0.60) = 48. The pass never
//! lowers a score and never chains: prerequisites raised here do not
//! propagate further within the same call.

use tracing::debug;

use crate::evidence::{EvidenceMap, SkillEvidence, EXTRA_SKILLS_KEY};
use crate::graph;
use crate::vocab;

/// Apply one pass of dependency boosting over an evidence map.
///
/// Entries are first re-keyed to canonical names (insertion order kept;
/// canonical collisions keep the first position, last value). Parents are
/// then examined using a snapshot of pre-pass proficiencies, so a skill
/// whose score was raised by this pass contributes nothing as a parent.
/// Zero or absent parent proficiency contributes no boosts. Missing
/// prerequisites are created as zero-proficiency entries before the floor
/// is applied.
///
/// The reserved extra-skills list is rebuilt at the end: every key except
/// `primary_skill`.
#[must_use]
pub fn apply_dependency_boost(evidence: &EvidenceMap, primary_skill: &str) -> EvidenceMap {
    let mut boosted = EvidenceMap::new();
    for (skill, data) in evidence.iter() {
        // The reserved key is not a skill, even when a caller inserted it
        // as a plain entry.
        if skill == EXTRA_SKILLS_KEY {
            continue;
        }
        boosted.insert(vocab::canonicalize(skill), data.clone());
    }

    // Pre-pass snapshot: parents are judged on what they scored before any
    // boosting, which keeps propagation single-hop.
    let snapshot: Vec<(String, u8)> = boosted
        .iter()
        .map(|(key, data)| (key.to_string(), data.proficiency.unwrap_or(0)))
        .collect();

    for (parent_skill, parent_proficiency) in snapshot {
        let Some((_, children)) = graph::find_parent(&parent_skill) else {
            continue;
        };
        if parent_proficiency == 0 {
            continue;
        }
        debug!(
            parent = %parent_skill,
            proficiency = parent_proficiency,
            "boosting prerequisites"
        );

        for (child, factor) in children {
            let minimum = (f64::from(parent_proficiency) * factor) as u8;

            let child_key = boosted.find_key_fuzzy(child).unwrap_or_else(|| {
                let key = vocab::canonicalize(child);
                boosted.insert(
                    key.clone(),
                    SkillEvidence::default()
                        .with_proficiency(0, "Inferred from parent skill"),
                );
                key
            });

            let Some(entry) = boosted.get_mut(&child_key) else {
                continue;
            };
            let current = entry.proficiency.unwrap_or(0);
            if minimum > current {
                entry.proficiency = Some(minimum);
                entry.reasoning = Some(format!(
                    "Boosted from {parent_skill} (difficulty factor: {factor}) - \
                     was {current}, now {minimum}"
                ));
                debug!(child = %child_key, from = current, to = minimum, "raised floor");
            } else {
                debug!(child = %child_key, proficiency = current, "already sufficient");
            }
        }
    }

    let extras = boosted
        .keys()
        .filter(|key| *key != primary_skill)
        .map(str::to_string)
        .collect();
    boosted.set_extra_skills(extras);
    boosted
}
