//! Deterministic career roadmap generation.
//!
//! Produces the curated two-path roadmap used when no upstream roadmap
//! source is available, and enriches any roadmap with course links for
//! steps that lack them.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A linked course recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub platform: String,
    pub url: String,
    pub level: String,
}

impl Course {
    fn new(name: &str, platform: &str, url: &str, level: &str) -> Self {
        Self {
            name: name.to_string(),
            platform: platform.to_string(),
            url: url.to_string(),
            level: level.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step_number: u32,
    pub title: String,
    pub estimated_time: String,
    pub skills_to_learn: Vec<String>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPath {
    pub path_name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub timeline: String,
    pub steps: Vec<RoadmapStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub current_position: String,
    pub target_position: String,
    pub paths: Vec<CareerPath>,
    pub required_skills: Vec<String>,
    pub optional_skills: Vec<String>,
}

/// Course database for enrichment: substring key -> course. Iteration order
/// matters, the first key contained in a skill name wins.
const COURSE_DATABASE: &[(&str, &str, &str, &str, &str)] = &[
    (
        "react",
        "React Complete Course",
        "Udemy",
        "https://www.udemy.com/course/react-the-complete-guide-incl-redux/",
        "All Levels",
    ),
    (
        "javascript",
        "JavaScript - The Complete Guide",
        "Udemy",
        "https://www.udemy.com/course/javascript-the-complete-guide-2020-beginner-advanced/",
        "All Levels",
    ),
    (
        "python",
        "Complete Python Bootcamp",
        "Udemy",
        "https://www.udemy.com/course/complete-python-bootcamp/",
        "Beginner to Advanced",
    ),
    (
        "node",
        "Node.js Complete Guide",
        "Udemy",
        "https://www.udemy.com/course/nodejs-the-complete-guide/",
        "All Levels",
    ),
    (
        "html",
        "HTML & CSS for Beginners",
        "freeCodeCamp",
        "https://www.freecodecamp.org/learn/responsive-web-design/",
        "Beginner",
    ),
    (
        "css",
        "Advanced CSS and Sass",
        "Udemy",
        "https://www.udemy.com/course/advanced-css-and-sass/",
        "Intermediate",
    ),
];

/// Build the curated fallback roadmap: a frontend specialist path and a
/// full-stack path, seeded with working course links.
#[must_use]
pub fn fallback_roadmap(current_skills: &[String], target_role: &str) -> Roadmap {
    let summary = current_skills.iter().take(3).join(", ");
    Roadmap {
        current_position: format!("Developer with skills in {summary}"),
        target_position: target_role.to_string(),
        paths: vec![
            CareerPath {
                path_name: "Frontend Specialist Path".to_string(),
                description: "Focus on modern frontend technologies".to_string(),
                difficulty: Difficulty::Medium,
                timeline: "6-9 months".to_string(),
                steps: vec![
                    RoadmapStep {
                        step_number: 1,
                        title: "Master React & Modern JavaScript".to_string(),
                        estimated_time: "2-3 months".to_string(),
                        skills_to_learn: vec![
                            "React".to_string(),
                            "ES6+".to_string(),
                            "TypeScript".to_string(),
                        ],
                        courses: vec![
                            Course::new(
                                "React - The Complete Guide",
                                "Udemy",
                                "https://www.udemy.com/course/react-the-complete-guide-incl-redux/",
                                "All Levels",
                            ),
                            Course::new(
                                "JavaScript Algorithms and Data Structures",
                                "freeCodeCamp",
                                "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures/",
                                "Beginner to Intermediate",
                            ),
                        ],
                    },
                    RoadmapStep {
                        step_number: 2,
                        title: "Build Production Applications".to_string(),
                        estimated_time: "2-3 months".to_string(),
                        skills_to_learn: vec![
                            "State Management".to_string(),
                            "API Integration".to_string(),
                            "Testing".to_string(),
                        ],
                        courses: vec![Course::new(
                            "Advanced React Patterns",
                            "Frontend Masters",
                            "https://frontendmasters.com/courses/advanced-react-patterns/",
                            "Advanced",
                        )],
                    },
                ],
            },
            CareerPath {
                path_name: "Full Stack Development Path".to_string(),
                description: "Become proficient in both frontend and backend".to_string(),
                difficulty: Difficulty::Hard,
                timeline: "9-12 months".to_string(),
                steps: vec![RoadmapStep {
                    step_number: 1,
                    title: "Master Backend Technologies".to_string(),
                    estimated_time: "3-4 months".to_string(),
                    skills_to_learn: vec![
                        "Node.js".to_string(),
                        "Express".to_string(),
                        "Databases".to_string(),
                    ],
                    courses: vec![
                        Course::new(
                            "Node.js - The Complete Guide",
                            "Udemy",
                            "https://www.udemy.com/course/nodejs-the-complete-guide/",
                            "Beginner to Advanced",
                        ),
                        Course::new(
                            "Full Stack Open",
                            "University of Helsinki",
                            "https://fullstackopen.com/en/",
                            "All Levels",
                        ),
                    ],
                }],
            },
        ],
        required_skills: ["JavaScript", "React", "HTML", "CSS", "Git"]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        optional_skills: ["TypeScript", "GraphQL", "Docker", "AWS"]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
    }
}

/// Fill in course links for steps that have none.
///
/// Up to two skills per step are looked up in the course database by
/// substring; a generic catch-all course is added when nothing matches.
/// Steps that already carry courses are left untouched.
pub fn enrich_with_courses(roadmap: &mut Roadmap) {
    for path in &mut roadmap.paths {
        for step in &mut path.steps {
            if !step.courses.is_empty() {
                continue;
            }
            for skill in step.skills_to_learn.iter().take(2) {
                let skill_lower = skill.to_lowercase();
                if let Some((_, name, platform, url, level)) = COURSE_DATABASE
                    .iter()
                    .find(|(key, ..)| skill_lower.contains(key))
                {
                    step.courses.push(Course::new(name, platform, url, level));
                }
            }
            if step.courses.is_empty() {
                step.courses.push(Course::new(
                    &format!("Learn {}", step.title),
                    "Coursera",
                    "https://www.coursera.org/",
                    "All Levels",
                ));
            }
        }
    }
}
