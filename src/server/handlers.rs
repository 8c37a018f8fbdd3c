//! Route handlers. Each request resolves its language, reloads the content it
//! needs and renders one page or fragment; no state survives between requests.

use super::locale::{query_value, Locale};
use super::AppState;
use crate::contact::ContactForm;
use crate::content::{EducationList, ExperienceItem, ExperienceList, Profile, ProjectList};
use crate::error::AppError;
use crate::github::{is_valid_name, RepoStats};
use crate::render;
use crate::skills::filter_skills;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::{Form, Json};
use maud::Markup;
use tracing::{error, info};

pub async fn index(State(state): State<AppState>, Locale(language): Locale) -> Markup {
    let profile = state.content.load::<Profile>(language).await.into_inner();
    let skills: Vec<&str> = state.skills.iter().map(String::as_str).collect();

    render::index_page(&state.render_context(language), &profile, &skills)
}

pub async fn experience(State(state): State<AppState>, Locale(language): Locale) -> Markup {
    let list = state.content.load::<ExperienceList>(language).await.into_inner();
    render::experience_section(&state.render_context(language), &list)
}

pub async fn experience_detail(
    State(state): State<AppState>,
    Locale(language): Locale,
    Path(raw_id): Path<String>,
) -> Result<Markup, AppError> {
    let list = state.content.load::<ExperienceList>(language).await.into_inner();
    let (id, item) = lookup_experience(&list, &raw_id)?;

    Ok(render::experience_detail(&state.render_context(language), item, id))
}

pub async fn experience_collapse(
    State(state): State<AppState>,
    Locale(language): Locale,
    Path(raw_id): Path<String>,
) -> Result<Markup, AppError> {
    let list = state.content.load::<ExperienceList>(language).await.into_inner();
    let (id, item) = lookup_experience(&list, &raw_id)?;

    Ok(render::experience_summary(&state.render_context(language), item, id))
}

pub async fn education(State(state): State<AppState>, Locale(language): Locale) -> Markup {
    let list = state.content.load::<EducationList>(language).await.into_inner();
    render::education_section(&state.render_context(language), &list)
}

pub async fn projects(State(state): State<AppState>, Locale(language): Locale) -> Markup {
    let list = state.content.load::<ProjectList>(language).await.into_inner();
    render::projects_section(&state.render_context(language), &list)
}

pub async fn skills(State(state): State<AppState>, uri: Uri) -> Markup {
    let query = query_value(&uri, "q").unwrap_or_default();
    let matches = filter_skills(&query, &state.skills[..]);
    render::skill_tags(&matches)
}

pub async fn contact(State(state): State<AppState>, Locale(language): Locale) -> Markup {
    render::contact_form(&state.render_context(language))
}

pub async fn contact_submit(
    State(state): State<AppState>,
    Locale(language): Locale,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Markup, AppError> {
    // A body that is not a urlencoded form carries no fields
    let pairs = form.map(|Form(pairs)| pairs).unwrap_or_default();
    let message = ContactForm::from_pairs(pairs)
        .validate()
        .map_err(|_| AppError::MissingFields(language))?;

    if let Err(e) = state.mailer.send(&message).await {
        error!("Failed to relay contact message from {}: {}", message.email, e);
        return Err(AppError::SendFailed {
            language,
            reason: e.to_string(),
        });
    }

    info!("Contact message from {} delivered", message.email);
    Ok(render::contact_success(&state.render_context(language)))
}

pub async fn github_stats(
    State(state): State<AppState>,
    Path(repo): Path<String>,
) -> Result<Json<RepoStats>, AppError> {
    check_name(&repo)?;
    fetch_stats(&state, &repo).await
}

pub async fn github_stats_for_owner(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
) -> Result<Json<RepoStats>, AppError> {
    check_name(&owner)?;
    check_name(&repo)?;
    fetch_stats(&state, &format!("{}/{}", owner, repo)).await
}

fn check_name(segment: &str) -> Result<(), AppError> {
    if is_valid_name(segment) {
        Ok(())
    } else {
        Err(AppError::InvalidRepo(segment.to_string()))
    }
}

async fn fetch_stats(state: &AppState, repo: &str) -> Result<Json<RepoStats>, AppError> {
    match state.github.fetch_stats(repo).await {
        Ok(stats) => Ok(Json(stats)),
        Err(e) => {
            error!("Failed to fetch stats for {}: {}", repo, e);
            Err(AppError::StatsUnavailable(e.to_string()))
        }
    }
}

/// Parse an experience id and find its entry in the current list.
pub fn lookup_experience<'a>(
    list: &'a ExperienceList,
    raw: &str,
) -> Result<(usize, &'a ExperienceItem), AppError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::InvalidId(raw.to_string()))?;
    let id = usize::try_from(id).map_err(|_| AppError::InvalidId(raw.to_string()))?;

    let item = list.get(id).ok_or(AppError::IdOutOfRange {
        id,
        len: list.experience_items.len(),
    })?;

    Ok((id, item))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience(titles: &[&str]) -> ExperienceList {
        ExperienceList {
            experience_items: titles
                .iter()
                .map(|title| ExperienceItem {
                    title: title.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_lookup_experience_in_range() {
        let list = experience(&["First", "Second", "Third"]);

        let (id, item) = lookup_experience(&list, "0").unwrap();
        assert_eq!((id, item.title.as_str()), (0, "First"));

        let (id, item) = lookup_experience(&list, "2").unwrap();
        assert_eq!((id, item.title.as_str()), (2, "Third"));
    }

    #[test]
    fn test_lookup_experience_out_of_range() {
        let list = experience(&["First", "Second", "Third"]);

        assert!(matches!(
            lookup_experience(&list, "3"),
            Err(AppError::IdOutOfRange { id: 3, len: 3 })
        ));
        assert!(matches!(
            lookup_experience(&list, "5"),
            Err(AppError::IdOutOfRange { .. })
        ));
        assert!(matches!(
            lookup_experience(&experience(&[]), "0"),
            Err(AppError::IdOutOfRange { id: 0, len: 0 })
        ));
    }

    #[test]
    fn test_lookup_experience_negative_is_invalid() {
        let list = experience(&["First"]);
        assert!(matches!(lookup_experience(&list, "-1"), Err(AppError::InvalidId(_))));
    }

    #[test]
    fn test_lookup_experience_non_integer_is_invalid() {
        let list = experience(&["First"]);
        for raw in ["abc", "1.5", "", "99999999999999999999"] {
            assert!(matches!(lookup_experience(&list, raw), Err(AppError::InvalidId(_))));
        }
    }
}
