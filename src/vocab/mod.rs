//! Skill name vocabulary: normalization, canonicalization, and fuzzy matching.
//!
//! Every component downstream (dependency boosting, reconciliation, trend
//! classification) funnels skill names through this module so that "js",
//! "JS", and "JavaScript" always collapse to one spelling.

mod aliases;

use std::collections::HashMap;
use std::sync::OnceLock;

use aliases::SKILL_ALIASES;

fn alias_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| SKILL_ALIASES.iter().copied().collect())
}

/// Normalize a skill name for comparison: trim surrounding whitespace and
/// lowercase. Empty input stays empty.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Canonicalize a skill name to its display spelling.
///
/// Table hit wins ("postgres" -> "PostgreSQL"). Otherwise short all-alphabetic
/// names are treated as acronyms and uppercased; everything else is
/// title-cased word by word. Total and deterministic; the empty string is
/// returned unchanged.
#[must_use]
pub fn canonicalize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let normalized = normalize(name);
    if let Some(canonical) = alias_map().get(normalized.as_str()) {
        return (*canonical).to_string();
    }

    let trimmed = name.trim();
    if !trimmed.is_empty()
        && trimmed.chars().count() <= 4
        && trimmed.chars().all(char::is_alphabetic)
    {
        return trimmed.to_uppercase();
    }

    title_case(trimmed)
}

/// Capitalize the first character of each whitespace-separated word and
/// lowercase the rest.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strict equivalence: normalized equality, directly or through canonical
/// forms. No substring tier, so "Java" and "JavaScript" stay distinct.
/// Used where a false positive would be costly, like dependency-graph
/// parent lookups.
#[must_use]
pub fn canonical_eq(a: &str, b: &str) -> bool {
    if normalize(a) == normalize(b) {
        return true;
    }
    normalize(&canonicalize(a)) == normalize(&canonicalize(b))
}

/// Loose equivalence between two skill names.
///
/// Three tiers, permissive by design: normalized equality, canonical
/// equality, then substring containment in either direction on the
/// normalized forms. The containment tier will happily pair "Java" with
/// "JavaScript"; callers accept that tradeoff in exchange for catching
/// "React" / "React.js" style variants.
#[must_use]
pub fn skills_match(a: &str, b: &str) -> bool {
    if canonical_eq(a, b) {
        return true;
    }
    let norm_a = normalize(a);
    let norm_b = normalize(b);
    norm_a.contains(norm_b.as_str()) || norm_b.contains(norm_a.as_str())
}

/// Case-insensitive containment check used by trend classification: equality
/// or substring in either direction, without canonicalization.
#[must_use]
pub fn loose_contains(a: &str, b: &str) -> bool {
    let norm_a = normalize(a);
    let norm_b = normalize(b);
    norm_a == norm_b || norm_a.contains(norm_b.as_str()) || norm_b.contains(norm_a.as_str())
}

/// Find the first key in `keys` whose normalized form equals the target's.
/// Exact (tier-1) matching only; insertion order decides ties.
pub fn find_matching_key<'a, I>(keys: I, target: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let target_norm = normalize(target);
    keys.into_iter().find(|key| normalize(key) == target_norm)
}

/// Parse a comma-separated skill list into canonical, de-duplicated names.
///
/// Items are trimmed, empties dropped, each canonicalized, and duplicates
/// collapsed case-insensitively with the first spelling winning. Input order
/// is preserved.
#[must_use]
pub fn parse_skill_list(input: &str) -> Vec<String> {
    dedup_canonical(input.split(','))
}

/// Canonicalize and de-duplicate an already-split list of skill names.
#[must_use]
pub fn canonicalize_all<'a, I>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    dedup_canonical(skills)
}

fn dedup_canonical<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = Vec::new();
    let mut out = Vec::new();
    for item in raw {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let canonical = canonicalize(item);
        let normalized = normalize(&canonical);
        if !seen.contains(&normalized) {
            seen.push(normalized);
            out.push(canonical);
        }
    }
    out
}

/// Case-insensitive union of claimed skills and detected skill names.
///
/// Claimed spellings win and come first; detected-only names are appended in
/// their canonical form, preserving encounter order.
#[must_use]
pub fn merge_unique<'a, C, D>(claimed: C, detected: D) -> Vec<String>
where
    C: IntoIterator<Item = &'a str>,
    D: IntoIterator<Item = &'a str>,
{
    let mut seen = Vec::new();
    let mut out = Vec::new();
    for skill in claimed {
        let normalized = normalize(skill);
        if let Some(pos) = seen.iter().position(|s| *s == normalized) {
            // Later claimed spelling replaces the earlier one, same slot.
            out[pos] = skill.to_string();
        } else {
            seen.push(normalized);
            out.push(skill.to_string());
        }
    }
    for skill in detected {
        let normalized = normalize(skill);
        if !seen.contains(&normalized) {
            seen.push(normalized);
            out.push(canonicalize(skill));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  ReAcT "), "react");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn canonicalize_uses_alias_table() {
        assert_eq!(canonicalize("js"), "JavaScript");
        assert_eq!(canonicalize("K8S"), "Kubernetes");
        assert_eq!(canonicalize("postgres"), "PostgreSQL");
        assert_eq!(canonicalize("  react.js  "), "React");
        assert_eq!(canonicalize("ror"), "Ruby on Rails");
    }

    #[test]
    fn canonicalize_acronym_heuristic() {
        // Unknown, short, all-alphabetic names become acronyms.
        assert_eq!(canonicalize("qup"), "QUP");
        assert_eq!(canonicalize(" xyz "), "XYZ");
        // Non-alphabetic characters disqualify the acronym path.
        assert_eq!(canonicalize("f#2"), "F#2");
    }

    #[test]
    fn canonicalize_title_cases_unknown_names() {
        assert_eq!(canonicalize("machine learning"), "Machine Learning");
        assert_eq!(canonicalize("apache KAFKA"), "Apache Kafka");
    }

    #[test]
    fn canonicalize_empty_passthrough() {
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn canonicalize_is_idempotent_for_known_names() {
        for (_, canonical) in aliases::SKILL_ALIASES {
            assert_eq!(
                canonicalize(canonical),
                *canonical,
                "canonical form {canonical} must survive re-canonicalization"
            );
        }
    }

    #[test]
    fn match_tier_one_normalized_equality() {
        assert!(skills_match("React", " react "));
        assert!(skills_match("PYTHON", "python"));
    }

    #[test]
    fn match_tier_two_canonical_equality() {
        assert!(skills_match("js", "JavaScript"));
        assert!(skills_match("postgres", "PostgreSQL"));
        assert!(skills_match("k8s", "kubernetes"));
    }

    #[test]
    fn canonical_eq_has_no_substring_tier() {
        assert!(canonical_eq("js", "JavaScript"));
        assert!(canonical_eq(" REACT ", "react"));
        assert!(!canonical_eq("Java", "JavaScript"));
        assert!(!canonical_eq("Go", "Django"));
    }

    #[test]
    fn match_tier_three_containment() {
        assert!(skills_match("React", "React.js"));
        // Documented permissiveness: these pairs match by substring.
        assert!(skills_match("Java", "JavaScript"));
        assert!(skills_match("Go", "Django"));
    }

    #[test]
    fn match_is_symmetric() {
        assert_eq!(skills_match("Java", "JavaScript"), skills_match("JavaScript", "Java"));
        assert_eq!(skills_match("vue", "react"), skills_match("react", "vue"));
    }

    #[test]
    fn no_match_for_unrelated_names() {
        assert!(!skills_match("Rust", "Python"));
        assert!(!skills_match("Vue", "Angular"));
    }

    #[test]
    fn find_matching_key_exact_normalized_only() {
        let keys = ["JavaScript", "React", "Python"];
        assert_eq!(find_matching_key(keys.iter().copied(), "  REACT "), Some("React"));
        // Substring matching is not part of key lookup.
        assert_eq!(find_matching_key(keys.iter().copied(), "Java"), None);
    }

    #[test]
    fn parse_skill_list_dedups_case_insensitively() {
        assert_eq!(parse_skill_list("React, react, REACT "), vec!["React"]);
        assert_eq!(
            parse_skill_list("js, python , , JS"),
            vec!["JavaScript", "Python"]
        );
        assert!(parse_skill_list("  ,  ,").is_empty());
    }

    #[test]
    fn merge_unique_claimed_spelling_wins() {
        let merged = merge_unique(
            ["reactjs", "Python"].iter().copied(),
            ["React", "Django", "python"].iter().copied(),
        );
        assert_eq!(merged, vec!["reactjs", "Python", "Django"]);
    }

    #[test]
    fn loose_contains_matches_either_direction() {
        assert!(loose_contains("TypeScript", "script"));
        assert!(loose_contains("script", "TypeScript"));
        assert!(!loose_contains("Rust", "Go"));
    }
}
