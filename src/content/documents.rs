//! Shapes of the localized content documents.
//!
//! Field names match the JSON files on disk. Missing fields decode to their
//! zero value; unknown fields are ignored.

use super::ContentKind;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A document type that can be loaded from `<kind>_<lang>.json`.
pub trait ContentDocument: DeserializeOwned + Default {
    const KIND: ContentKind;
}

/// Header block of the index page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Profile {
    pub title: String,
    pub text: String,
}

impl ContentDocument for Profile {
    const KIND: ContentKind = ContentKind::Profile;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    /// Free text, e.g. "2021 - Present"
    pub period: String,
    /// Bullet points, in display order
    pub description: Vec<String>,
}

/// Experience entries. An entry is addressed by its index in this list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExperienceList {
    pub experience_items: Vec<ExperienceItem>,
}

impl ExperienceList {
    /// Look up an entry by the id used in detail/collapse URLs.
    pub fn get(&self, index: usize) -> Option<&ExperienceItem> {
        self.experience_items.get(index)
    }
}

impl ContentDocument for ExperienceList {
    const KIND: ContentKind = ContentKind::Experience;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EducationItem {
    pub title: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EducationList {
    pub education_items: Vec<EducationItem>,
}

impl ContentDocument for EducationList {
    const KIND: ContentKind = ContentKind::Education;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProjectItem {
    pub title: String,
    pub description: String,
    #[serde(rename = "GitHubLink")]
    pub github_link: String,
}

impl ProjectItem {
    /// `owner/repo` when the link points at a GitHub repository.
    pub fn github_repo(&self) -> Option<(&str, &str)> {
        let rest = self
            .github_link
            .strip_prefix("https://github.com/")
            .or_else(|| self.github_link.strip_prefix("http://github.com/"))?;

        let mut segments = rest.trim_end_matches('/').split('/');
        let owner = segments.next().filter(|s| !s.is_empty())?;
        let repo = segments.next().filter(|s| !s.is_empty())?;
        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        Some((owner, repo))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProjectList {
    pub project_items: Vec<ProjectItem>,
}

impl ContentDocument for ProjectList {
    const KIND: ContentKind = ContentKind::Projects;
}
