//! Static skill dependency graph.
//!
//! A curated table of parent skill -> weighted prerequisite skills. Knowing
//! a framework implies a floor of proficiency in what it is built on; the
//! factor expresses how much of the parent's score carries over. The table
//! is read-only and deliberately shallow: propagation over it runs exactly
//! one pass (see [`boost`]), so no cycle handling is needed.

mod boost;

pub use boost::apply_dependency_boost;

use crate::vocab;

/// Parent -> (prerequisite, boost factor). Names are canonical spellings.
/// Factors are fractions of the parent's proficiency in (0, 1].
const DEPENDENCY_EDGES: &[(&str, &[(&str, f64)])] = &[
    // Frontend frameworks
    ("React", &[("JavaScript", 0.60), ("HTML", 0.90), ("CSS", 0.85)]),
    ("Vue", &[("JavaScript", 0.60), ("HTML", 0.90), ("CSS", 0.85)]),
    (
        "Angular",
        &[
            ("JavaScript", 0.55),
            ("TypeScript", 0.70),
            ("HTML", 0.90),
            ("CSS", 0.85),
        ],
    ),
    (
        "Next.js",
        &[
            ("React", 0.75),
            ("JavaScript", 0.60),
            ("HTML", 0.90),
            ("CSS", 0.85),
        ],
    ),
    ("Svelte", &[("JavaScript", 0.60), ("HTML", 0.90), ("CSS", 0.85)]),
    // Backend frameworks
    ("Django", &[("Python", 0.70)]),
    ("Flask", &[("Python", 0.75)]),
    ("FastAPI", &[("Python", 0.75)]),
    ("Express", &[("JavaScript", 0.70), ("Node.js", 0.80)]),
    ("Spring", &[("Java", 0.65)]),
    ("Spring Boot", &[("Java", 0.65), ("Spring", 0.75)]),
    // Mobile
    ("React Native", &[("React", 0.80), ("JavaScript", 0.65)]),
    ("Flutter", &[("Dart", 0.75)]),
    ("Swift", &[("iOS", 0.80)]),
    ("Kotlin", &[("Java", 0.60), ("Android", 0.80)]),
    // Language layering
    ("TypeScript", &[("JavaScript", 0.85)]),
    ("Node.js", &[("JavaScript", 0.80)]),
    // CSS tooling
    ("Sass", &[("CSS", 0.85)]),
    ("SCSS", &[("CSS", 0.85)]),
    ("Tailwind CSS", &[("CSS", 0.80), ("HTML", 0.90)]),
    ("Bootstrap", &[("CSS", 0.85), ("HTML", 0.90)]),
    // Testing frameworks
    ("Jest", &[("JavaScript", 0.55)]),
    ("Pytest", &[("Python", 0.55)]),
    ("Mocha", &[("JavaScript", 0.55)]),
    // Data science and ML
    ("TensorFlow", &[("Python", 0.65)]),
    ("PyTorch", &[("Python", 0.65)]),
    ("Pandas", &[("Python", 0.75)]),
    ("NumPy", &[("Python", 0.75)]),
    // ORMs
    ("Mongoose", &[("MongoDB", 0.80), ("JavaScript", 0.65)]),
    ("SQLAlchemy", &[("Python", 0.70), ("SQL", 0.75)]),
    // DevOps
    ("Docker", &[("Linux", 0.65)]),
    ("Kubernetes", &[("Docker", 0.75), ("Linux", 0.60)]),
];

/// All parent entries in table order.
#[must_use]
pub fn all_edges() -> &'static [(&'static str, &'static [(&'static str, f64)])] {
    DEPENDENCY_EDGES
}

/// Find the table entry for a skill acting as a parent.
///
/// Lookup is strict ([`vocab::canonical_eq`]): alias and case variance
/// match, substrings do not, so "Boot" never inherits "Spring Boot"'s
/// prerequisites. First table entry wins.
#[must_use]
pub fn find_parent(name: &str) -> Option<(&'static str, &'static [(&'static str, f64)])> {
    DEPENDENCY_EDGES
        .iter()
        .find(|(parent, _)| vocab::canonical_eq(parent, name))
        .map(|(parent, children)| (*parent, *children))
}

/// Prerequisites of a skill, if it has a table entry.
#[must_use]
pub fn dependencies_of(name: &str) -> Option<&'static [(&'static str, f64)]> {
    find_parent(name).map(|(_, children)| children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_parent_accepts_aliases() {
        let (key, children) = find_parent("reactjs").unwrap();
        assert_eq!(key, "React");
        assert!(children.iter().any(|(c, f)| *c == "JavaScript" && (*f - 0.60).abs() < f64::EPSILON));
    }

    #[test]
    fn find_parent_rejects_substring_relatives() {
        // Prerequisite-only skills are not parents.
        assert!(find_parent("Java").is_none());
        // Substring overlap with a parent key is not a match.
        assert!(find_parent("Boot").is_none());
        assert!(find_parent("Script").is_none());
    }

    #[test]
    fn absent_skills_have_no_dependencies() {
        assert!(dependencies_of("Rust").is_none());
        assert!(dependencies_of("").is_none());
    }

    #[test]
    fn factors_stay_in_unit_interval() {
        for (parent, children) in all_edges() {
            for (child, factor) in *children {
                assert!(
                    *factor > 0.0 && *factor <= 1.0,
                    "{parent} -> {child} factor {factor} out of range"
                );
            }
        }
    }

    #[test]
    fn table_names_are_canonical() {
        for (parent, children) in all_edges() {
            assert_eq!(crate::vocab::canonicalize(parent), *parent);
            for (child, _) in *children {
                assert_eq!(crate::vocab::canonicalize(child), *child);
            }
        }
    }
}
