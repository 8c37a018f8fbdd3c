use super::{skill_tags, RenderContext};
use crate::content::Profile;
use crate::i18n::LanguageRegistry;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";
const ANIMATE_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/animate.css/4.1.1/animate.min.css";
const REGISTER_SW: &str =
    "if ('serviceWorker' in navigator) { navigator.serviceWorker.register('/sw.js'); }";

/// Renders the full index page. Sections other than the profile and skills
/// load themselves once the page is shown.
pub fn index_page(ctx: &RenderContext, profile: &Profile, skills: &[&str]) -> Markup {
    let title = if profile.title.is_empty() {
        "Portfolio"
    } else {
        profile.title.as_str()
    };

    html! {
        (DOCTYPE)
        html lang=(ctx.language.code()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="manifest" href="/manifest.json";
                link rel="stylesheet" href=(ANIMATE_CSS);
                link rel="stylesheet" href="/static/styles.css";
                script src=(HTMX_SRC) {}
            }
            body {
                (site_header(ctx, profile))
                main {
                    section #skills {
                        h2 { (ctx.t("skills")) }
                        input.skill-filter
                            type="search"
                            name="q"
                            placeholder=(ctx.t("filter_skills"))
                            hx-get="/cv/skills"
                            hx-trigger="keyup changed delay:300ms, search"
                            hx-target="#skill-list";
                        div #skill-list { (skill_tags(skills)) }
                    }
                    (lazy_section(ctx, "experience", "/cv/experience", "loading_experience"))
                    (lazy_section(ctx, "education", "/cv/education", "loading_education"))
                    (lazy_section(ctx, "projects", "/cv/projects", "loading_projects"))
                    (lazy_section(ctx, "contact", "/contact", "loading_contact"))
                }
                script src="/static/app.js" {}
                script { (PreEscaped(REGISTER_SW)) }
            }
        }
    }
}

fn site_header(ctx: &RenderContext, profile: &Profile) -> Markup {
    html! {
        header.site-header {
            div.profile {
                h1 { (profile.title) }
                p { (profile.text) }
            }
            nav.site-nav {
                a href="#experience" { (ctx.t("experience")) }
                a href="#education" { (ctx.t("education")) }
                a href="#projects" { (ctx.t("projects")) }
                a href="#skills" { (ctx.t("skills")) }
                a href="#contact" { (ctx.t("contact")) }
            }
            nav.language-switcher {
                @for language in LanguageRegistry::get().list_enabled() {
                    @let is_current = language.code == ctx.language.code();
                    a.lang-link.current[is_current]
                        href={ "/?lang=" (language.code) }
                        data-lang=(language.code) {
                        (language.native_name)
                    }
                }
            }
            button #theme-toggle type="button" aria-label=(ctx.t("toggle_theme")) { "◐" }
        }
    }
}

fn lazy_section(ctx: &RenderContext, id: &str, path: &str, loading_key: &str) -> Markup {
    html! {
        section id=(id) hx-get=(ctx.localized(path)) hx-trigger="load" {
            p.loading { (ctx.t(loading_key)) }
        }
    }
}
