//! Skill evidence: per-skill repository statistics, the insertion-ordered
//! evidence map, and the fallback proficiency estimators.
//!
//! The map preserves insertion order because key order is load-bearing:
//! de-duplication keeps the first spelling seen and every downstream pass
//! iterates in input order. The wire shape mixes skill objects with one
//! reserved array-valued key, so serde is handwritten.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

use crate::vocab;

/// Reserved key listing detected-but-not-primary skills. Never holds an
/// evidence entry; serialized as a plain string array.
pub const EXTRA_SKILLS_KEY: &str = "extra_skills_found";

/// Evidence gathered for one skill across scanned projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEvidence {
    /// Total bytes of code attributed to this skill.
    pub total_bytes: u64,
    /// Number of distinct projects the skill appeared in.
    pub project_count: u32,
    /// Names of those projects.
    pub projects: Vec<String>,
    /// Estimated proficiency on a 0..=100 scale, absent until estimated.
    #[serde(rename = "ai_proficiency", skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<u8>,
    /// Where the proficiency figure came from.
    #[serde(rename = "ai_reasoning", skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl SkillEvidence {
    /// Evidence with counts but no proficiency estimate yet.
    #[must_use]
    pub fn from_counts(total_bytes: u64, project_count: u32) -> Self {
        Self {
            total_bytes,
            project_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_proficiency(mut self, proficiency: u8, reasoning: &str) -> Self {
        self.proficiency = Some(proficiency);
        self.reasoning = Some(reasoning.to_string());
        self
    }
}

/// Insertion-ordered map of skill name to evidence, plus the reserved
/// extra-skills list.
///
/// Lookups are linear; maps here hold tens of entries, not thousands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceMap {
    entries: Vec<(String, SkillEvidence)>,
    extra_skills: Option<Vec<String>>,
}

impl EvidenceMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace. An exact-key replacement keeps the entry's
    /// original position; a new key appends.
    pub fn insert(&mut self, key: impl Into<String>, evidence: SkillEvidence) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = evidence;
        } else {
            self.entries.push((key, evidence));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SkillEvidence> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut SkillEvidence> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// First key whose normalized form equals the target's, in insertion
    /// order. Returns the stored spelling.
    #[must_use]
    pub fn find_key(&self, target: &str) -> Option<String> {
        vocab::find_matching_key(self.entries.iter().map(|(k, _)| k.as_str()), target)
            .map(str::to_string)
    }

    /// First key that fuzzily matches the target via [`vocab::skills_match`],
    /// in insertion order.
    #[must_use]
    pub fn find_key_fuzzy(&self, target: &str) -> Option<String> {
        self.entries
            .iter()
            .map(|(k, _)| k.as_str())
            .find(|key| vocab::skills_match(key, target))
            .map(str::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillEvidence)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn extra_skills(&self) -> Option<&[String]> {
        self.extra_skills.as_deref()
    }

    pub fn set_extra_skills(&mut self, skills: Vec<String>) {
        self.extra_skills = Some(skills);
    }
}

impl FromIterator<(String, SkillEvidence)> for EvidenceMap {
    fn from_iter<T: IntoIterator<Item = (String, SkillEvidence)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, evidence) in iter {
            map.insert(key, evidence);
        }
        map
    }
}

impl Serialize for EvidenceMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let extra = usize::from(self.extra_skills.is_some());
        let mut map = serializer.serialize_map(Some(self.entries.len() + extra))?;
        for (key, evidence) in &self.entries {
            map.serialize_entry(key, evidence)?;
        }
        if let Some(skills) = &self.extra_skills {
            map.serialize_entry(EXTRA_SKILLS_KEY, skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EvidenceMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EvidenceMapVisitor;

        impl<'de> Visitor<'de> for EvidenceMapVisitor {
            type Value = EvidenceMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of skill names to evidence entries")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = EvidenceMap::new();
                while let Some(key) = access.next_key::<String>()? {
                    if key == EXTRA_SKILLS_KEY {
                        map.extra_skills = Some(access.next_value()?);
                    } else {
                        let evidence = access.next_value()?;
                        map.insert(key, evidence);
                    }
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(EvidenceMapVisitor)
    }
}

/// One skill's entry in an upstream estimator's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Estimate {
    pub proficiency: Option<u8>,
    pub reason: Option<String>,
}

/// Insertion-ordered estimator output, keyed by whatever spellings the
/// estimator chose. Matching against evidence keys is fuzzy.
#[derive(Debug, Clone, Default)]
pub struct EstimateSet(Vec<(String, Estimate)>);

impl EstimateSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First estimate whose key fuzzily matches the skill, in insertion
    /// order.
    #[must_use]
    pub fn find_match(&self, skill: &str) -> Option<&Estimate> {
        self.0
            .iter()
            .find(|(key, _)| vocab::skills_match(key, skill))
            .map(|(_, est)| est)
    }
}

impl FromIterator<(String, Estimate)> for EstimateSet {
    fn from_iter<T: IntoIterator<Item = (String, Estimate)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for EstimateSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EstimateSetVisitor;

        impl<'de> Visitor<'de> for EstimateSetVisitor {
            type Value = EstimateSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of skill names to estimates")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(key) = access.next_key::<String>()? {
                    entries.push((key, access.next_value()?));
                }
                Ok(EstimateSet(entries))
            }
        }

        deserializer.deserialize_map(EstimateSetVisitor)
    }
}

/// Quick proficiency estimate from raw repository counts:
/// `min(project_count * 12 + total_bytes / 9000, 75)`.
#[must_use]
pub fn quick_estimate(evidence: &SkillEvidence) -> u8 {
    let raw = u64::from(evidence.project_count) * 12 + evidence.total_bytes / 9000;
    raw.min(75) as u8
}

/// Repo-size proficiency estimate with per-component caps:
/// `min(min(project_count * 10, 40) + min(total_bytes / 8000, 35), 80)`.
///
/// The component caps sum to 75, so the outer bound of 80 is slack; it is
/// kept so the two estimators stay independently tunable.
#[must_use]
pub fn repo_size_estimate(evidence: &SkillEvidence) -> u8 {
    let project_component = (u64::from(evidence.project_count) * 10).min(40) as f64;
    let size_component = (evidence.total_bytes as f64 / 8000.0).min(35.0);
    ((project_component + size_component) as u64).min(80) as u8
}

/// Merge estimator output into canonical-keyed evidence.
///
/// Every entry is re-keyed to its canonical name (colliding keys: last value
/// wins, first position kept). A fuzzy-matching estimate supplies proficiency
/// (default 40) and reason; entries without one fall back to
/// [`quick_estimate`]. When the estimator produced nothing at all, the whole
/// map falls back and no extra-skills list is recorded.
///
/// With estimates present, the reserved extra-skills list is set to every key
/// except `primary_skill`.
#[must_use]
pub fn apply_estimates(
    evidence: &EvidenceMap,
    estimates: Option<&EstimateSet>,
    primary_skill: &str,
) -> EvidenceMap {
    let Some(estimates) = estimates else {
        warn!("estimator output missing, applying quick estimates to all skills");
        let mut out = EvidenceMap::new();
        for (skill, data) in evidence.iter() {
            let entry = data
                .clone()
                .with_proficiency(quick_estimate(data), "Auto fallback estimation");
            out.insert(vocab::canonicalize(skill), entry);
        }
        return out;
    };

    let mut out = EvidenceMap::new();
    for (skill, data) in evidence.iter() {
        let canonical = vocab::canonicalize(skill);
        let entry = match estimates.find_match(skill) {
            Some(estimate) => {
                let proficiency = estimate.proficiency.unwrap_or(40);
                let reason = estimate.reason.as_deref().unwrap_or("Detected through AI");
                data.clone().with_proficiency(proficiency, reason)
            }
            None => {
                debug!(skill = %canonical, "no estimate matched, using quick estimate");
                data.clone()
                    .with_proficiency(quick_estimate(data), "Estimated size & usage")
            }
        };
        out.insert(canonical, entry);
    }

    let extras = out
        .keys()
        .filter(|key| *key != primary_skill)
        .map(str::to_string)
        .collect();
    out.set_extra_skills(extras);
    out
}

/// Fill proficiency for entries that have none, using [`quick_estimate`].
/// Entries already carrying a score are left untouched; keys are left as-is.
#[must_use]
pub fn fill_missing_estimates(evidence: &EvidenceMap) -> EvidenceMap {
    let mut out = evidence.clone();
    let mut filled = 0usize;
    for (_, data) in &mut out.entries {
        if data.proficiency.is_none() {
            data.proficiency = Some(quick_estimate(data));
            data.reasoning = Some("Auto fallback estimation".to_string());
            filled += 1;
        }
    }
    if filled > 0 {
        warn!(filled, "entries lacked proficiency, applied quick estimates");
    }
    out
}

/// Wholesale fallback: every entry re-scored with [`repo_size_estimate`].
/// Keys are left as-is.
#[must_use]
pub fn apply_repo_size_fallback(evidence: &EvidenceMap) -> EvidenceMap {
    let mut out = evidence.clone();
    for (_, data) in &mut out.entries {
        data.proficiency = Some(repo_size_estimate(data));
        data.reasoning = Some("Fallback based on repo size".to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(bytes: u64, projects: u32) -> SkillEvidence {
        SkillEvidence::from_counts(bytes, projects)
    }

    #[test]
    fn quick_estimate_combines_counts_and_bytes() {
        // 3 * 12 + 27000 / 9000 = 39
        assert_eq!(quick_estimate(&evidence(27_000, 3)), 39);
        assert_eq!(quick_estimate(&evidence(0, 0)), 0);
    }

    #[test]
    fn quick_estimate_caps_at_75() {
        assert_eq!(quick_estimate(&evidence(0, 10)), 75);
        assert_eq!(quick_estimate(&evidence(1_000_000, 1)), 75);
    }

    #[test]
    fn repo_size_estimate_caps_components() {
        // min(30, 40) + min(3.375, 35) = 33.375 -> 33
        assert_eq!(repo_size_estimate(&evidence(27_000, 3)), 33);
        // Both components saturated: 40 + 35 = 75.
        assert_eq!(repo_size_estimate(&evidence(10_000_000, 100)), 75);
        assert_eq!(repo_size_estimate(&evidence(0, 0)), 0);
    }

    #[test]
    fn repo_size_estimate_truncates_fraction() {
        // 0 + 8500/8000 = 1.0625 -> 1
        assert_eq!(repo_size_estimate(&evidence(8_500, 0)), 1);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut map = EvidenceMap::new();
        map.insert("JavaScript", evidence(100, 1));
        map.insert("Python", evidence(200, 2));
        map.insert("JavaScript", evidence(300, 3));
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["JavaScript", "Python"]);
        assert_eq!(map.get("JavaScript").map(|e| e.total_bytes), Some(300));
    }

    #[test]
    fn find_key_is_case_insensitive_and_ordered() {
        let mut map = EvidenceMap::new();
        map.insert("JavaScript", evidence(0, 0));
        map.insert("Python", evidence(0, 0));
        assert_eq!(map.find_key(" PYTHON "), Some("Python".to_string()));
        assert_eq!(map.find_key("Java"), None);
    }

    #[test]
    fn serde_round_trip_preserves_order_and_reserved_key() {
        let json = r#"{
            "Python": {"total_bytes": 9000, "project_count": 2, "projects": ["a"], "ai_proficiency": 70, "ai_reasoning": "strong"},
            "Django": {"total_bytes": 100, "project_count": 1, "projects": []},
            "extra_skills_found": ["Django"]
        }"#;
        let map: EvidenceMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.extra_skills(), Some(&["Django".to_string()][..]));
        assert_eq!(map.get("Python").unwrap().proficiency, Some(70));
        assert_eq!(map.get("Django").unwrap().proficiency, None);

        let out = serde_json::to_string(&map).unwrap();
        let python_pos = out.find("Python").unwrap();
        let django_pos = out.find("Django").unwrap();
        let extra_pos = out.find(EXTRA_SKILLS_KEY).unwrap();
        assert!(python_pos < django_pos && django_pos < extra_pos);
    }

    #[test]
    fn apply_estimates_prefers_matching_estimate() {
        let mut map = EvidenceMap::new();
        map.insert("js", evidence(9_000, 1));
        map.insert("Python", evidence(18_000, 2));

        let estimates: EstimateSet = [(
            "javascript".to_string(),
            Estimate {
                proficiency: Some(61),
                reason: Some("Clean code".to_string()),
            },
        )]
        .into_iter()
        .collect();

        let out = apply_estimates(&map, Some(&estimates), "React");
        let js = out.get("JavaScript").unwrap();
        assert_eq!(js.proficiency, Some(61));
        assert_eq!(js.reasoning.as_deref(), Some("Clean code"));

        // No estimate matched Python: quick estimate, 2*12 + 2 = 26.
        let python = out.get("Python").unwrap();
        assert_eq!(python.proficiency, Some(26));
        assert_eq!(python.reasoning.as_deref(), Some("Estimated size & usage"));
    }

    #[test]
    fn apply_estimates_defaults_for_sparse_estimate() {
        let mut map = EvidenceMap::new();
        map.insert("Rust", evidence(0, 0));
        let estimates: EstimateSet = [("rust".to_string(), Estimate::default())]
            .into_iter()
            .collect();
        let out = apply_estimates(&map, Some(&estimates), "React");
        let rust = out.get("Rust").unwrap();
        assert_eq!(rust.proficiency, Some(40));
        assert_eq!(rust.reasoning.as_deref(), Some("Detected through AI"));
    }

    #[test]
    fn apply_estimates_records_extras_without_primary() {
        let mut map = EvidenceMap::new();
        map.insert("react", evidence(0, 1));
        map.insert("Django", evidence(0, 1));
        let estimates = EstimateSet::default();
        let out = apply_estimates(&map, Some(&estimates), "React");
        assert_eq!(out.extra_skills(), Some(&["Django".to_string()][..]));
    }

    #[test]
    fn apply_estimates_none_falls_back_wholesale() {
        let mut map = EvidenceMap::new();
        map.insert("js", evidence(9_000, 1));
        let out = apply_estimates(&map, None, "React");
        let js = out.get("JavaScript").unwrap();
        // 1*12 + 1 = 13
        assert_eq!(js.proficiency, Some(13));
        assert_eq!(js.reasoning.as_deref(), Some("Auto fallback estimation"));
        assert!(out.extra_skills().is_none());
    }

    #[test]
    fn fill_missing_leaves_prefilled_scores_alone() {
        let mut map = EvidenceMap::new();
        map.insert("Python", evidence(0, 0).with_proficiency(70, "upstream"));
        map.insert("Rust", evidence(27_000, 3));
        let out = fill_missing_estimates(&map);
        assert_eq!(out.get("Python").unwrap().proficiency, Some(70));
        assert_eq!(out.get("Python").unwrap().reasoning.as_deref(), Some("upstream"));
        assert_eq!(out.get("Rust").unwrap().proficiency, Some(39));
        assert_eq!(
            out.get("Rust").unwrap().reasoning.as_deref(),
            Some("Auto fallback estimation")
        );
    }

    #[test]
    fn fuzzy_key_lookup_uses_containment() {
        let mut map = EvidenceMap::new();
        map.insert("JavaScript", evidence(0, 0));
        assert_eq!(map.find_key_fuzzy("js"), Some("JavaScript".to_string()));
        assert_eq!(map.find_key_fuzzy("Java"), Some("JavaScript".to_string()));
        assert_eq!(map.find_key_fuzzy("Python"), None);
    }

    #[test]
    fn repo_size_fallback_rescopes_everything() {
        let mut map = EvidenceMap::new();
        map.insert("Go", evidence(16_000, 1).with_proficiency(90, "old"));
        let out = apply_repo_size_fallback(&map);
        let go = out.get("Go").unwrap();
        // min(10, 40) + min(2.0, 35) = 12
        assert_eq!(go.proficiency, Some(12));
        assert_eq!(go.reasoning.as_deref(), Some("Fallback based on repo size"));
    }
}
