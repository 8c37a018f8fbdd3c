use super::RenderContext;
use crate::content::{EducationList, ExperienceItem, ExperienceList, ProjectItem, ProjectList};
use maud::{html, Markup};

// ============================================================================
// Experience
// ============================================================================

pub fn experience_section(ctx: &RenderContext, list: &ExperienceList) -> Markup {
    html! {
        h2 { (ctx.t("professional_experience")) }
        div.experience-list {
            @for (id, item) in list.experience_items.iter().enumerate() {
                (experience_summary(ctx, item, id))
            }
        }
    }
}

/// Collapsed entry; its button swaps itself for [`experience_detail`].
pub fn experience_summary(ctx: &RenderContext, item: &ExperienceItem, id: usize) -> Markup {
    html! {
        div.experience-item id=(experience_anchor(id)) {
            (experience_heading(item))
            button.toggle
                hx-get=(ctx.localized(&format!("/cv/experience/detail/{}", id)))
                hx-target={ "#" (experience_anchor(id)) }
                hx-swap="outerHTML" {
                (ctx.t("show_details"))
            }
        }
    }
}

/// Expanded entry with the description bullets.
pub fn experience_detail(ctx: &RenderContext, item: &ExperienceItem, id: usize) -> Markup {
    html! {
        div.experience-item.expanded id=(experience_anchor(id)) {
            (experience_heading(item))
            ul.experience-description {
                @for line in &item.description {
                    li { (line) }
                }
            }
            button.toggle
                hx-get=(ctx.localized(&format!("/cv/experience/collapse/{}", id)))
                hx-target={ "#" (experience_anchor(id)) }
                hx-swap="outerHTML" {
                (ctx.t("hide_details"))
            }
        }
    }
}

fn experience_heading(item: &ExperienceItem) -> Markup {
    html! {
        h3 { (item.title) }
        p.experience-meta {
            span.company { (item.company) }
            " · "
            span.period { (item.period) }
        }
    }
}

fn experience_anchor(id: usize) -> String {
    format!("experience-{}", id)
}

// ============================================================================
// Education
// ============================================================================

pub fn education_section(ctx: &RenderContext, list: &EducationList) -> Markup {
    html! {
        h2 { (ctx.t("education")) }
        div.education-list {
            @for item in &list.education_items {
                div.education-item {
                    h3 { (item.title) }
                    p.education-meta {
                        span.institution { (item.institution) }
                        " · "
                        span.period { (item.period) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Projects
// ============================================================================

pub fn projects_section(ctx: &RenderContext, list: &ProjectList) -> Markup {
    html! {
        h2 { (ctx.t("personal_projects")) }
        div.project-list {
            @for item in &list.project_items {
                (project_card(ctx, item))
            }
        }
    }
}

fn project_card(ctx: &RenderContext, item: &ProjectItem) -> Markup {
    html! {
        article.project {
            h3 { (item.title) }
            p { (item.description) }
            @if let Some((owner, repo)) = item.github_repo() {
                div.github-stats
                    data-stats-url={ "/api/github-stats/" (owner) "/" (repo) }
                    data-stars-label=(ctx.t("stars"))
                    data-forks-label=(ctx.t("forks")) {
                    (ctx.t("loading_stats"))
                }
                a href=(item.github_link) target="_blank" rel="noopener" {
                    (ctx.t("view_on_github"))
                }
            } @else if !item.github_link.is_empty() {
                a href=(item.github_link) target="_blank" rel="noopener" { (item.github_link) }
            }
        }
    }
}
