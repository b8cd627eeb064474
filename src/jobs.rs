//! Job search link construction.
//!
//! Builds search URLs across five job platforms for a target role and a
//! skill list. Pure string work, no network access.

use serde::Serialize;

use crate::vocab;

/// A ready-to-open job search link.
#[derive(Debug, Clone, Serialize)]
pub struct JobLink {
    pub title: String,
    pub company: String,
    pub location: String,
    pub skills_matched: Vec<String>,
    pub url: String,
    pub platform: String,
}

/// (platform, base url, query parameter prefix)
const JOB_PLATFORMS: &[(&str, &str, &str)] = &[
    ("LinkedIn", "https://www.linkedin.com/jobs/search/", "?keywords="),
    ("Indeed", "https://www.indeed.com/jobs", "?q="),
    ("Glassdoor", "https://www.glassdoor.com/Job/jobs.htm", "?sc.keyword="),
    ("AngelList", "https://angel.co/jobs", "?q="),
    ("Stack Overflow Jobs", "https://stackoverflow.com/jobs", "?q="),
];

/// Build job search links for a role and skill set, capped at `max_links`.
///
/// Per platform: one link querying the role, and, when at least two skills
/// are known, one link querying the top two skills joined with `+`. The
/// role is percent-encoded; `skills_matched` is capped at five names for
/// role links and six for skill links.
#[must_use]
pub fn job_links(skills: &[String], target_role: &str, max_links: usize) -> Vec<JobLink> {
    let canonical: Vec<String> = skills.iter().map(|s| vocab::canonicalize(s)).collect();
    let encoded_role = urlencoding::encode(target_role);

    let mut links = Vec::new();
    for (platform, base_url, params) in JOB_PLATFORMS {
        links.push(JobLink {
            title: format!("{target_role} Positions"),
            company: format!("Various Companies on {platform}"),
            location: "Multiple Locations".to_string(),
            skills_matched: canonical.iter().take(5).cloned().collect(),
            url: format!("{base_url}{params}{encoded_role}"),
            platform: (*platform).to_string(),
        });

        if canonical.len() >= 2 {
            let skills_query = canonical[..2].join("+").replace(' ', "+");
            links.push(JobLink {
                title: format!("{} Developer", canonical[0]),
                company: format!("Multiple Employers on {platform}"),
                location: "Remote & On-site".to_string(),
                skills_matched: canonical.iter().take(6).cloned().collect(),
                url: format!("{base_url}{params}{skills_query}"),
                platform: (*platform).to_string(),
            });
        }
    }

    links.truncate(max_links);
    links
}
