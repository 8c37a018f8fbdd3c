//! Skill list and the case-insensitive substring filter behind `/cv/skills`.

/// Skills shown on the index page when `SKILLS` is not configured.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Golang",
    "Python",
    "C",
    "React",
    "Stripe",
    "HubSpot",
    "PostgreSQL",
    "Docker",
    "Kubernetes",
    "Git",
    "Agile Methodologies",
    "Dutch (Native)",
    "English (Fluent)",
    "French (Fluent)",
    "AI Integration",
    "Privacy-Conscious AI",
    "Event Sourcing",
    "Domain-Driven Design",
];

/// Parse a comma-separated skill list, dropping blank entries.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Return the skills containing `query`, ignoring case, in their original order.
///
/// An empty query matches every skill.
pub fn filter_skills<'a, S: AsRef<str>>(query: &str, skills: &'a [S]) -> Vec<&'a str> {
    let needle = query.to_lowercase();

    skills
        .iter()
        .map(AsRef::as_ref)
        .filter(|skill| skill.to_lowercase().contains(&needle))
        .collect()
}
