//! HTML rendering.
//!
//! The index page is a full document; everything else is a fragment that the
//! page swaps in with htmx requests. Templates are [maud](https://maud.lambda.xyz/)
//! macros, so all content is escaped.
//!
//! Every template receives a [`RenderContext`] carrying the request language
//! and the translation table.

mod page;
mod sections;

pub use page::index_page;
pub use sections::{
    education_section, experience_detail, experience_section, experience_summary,
    projects_section,
};

use crate::i18n::{Language, TranslationTable};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub language: Language,
    pub translations: &'a TranslationTable,
}

impl<'a> RenderContext<'a> {
    pub fn new(language: Language, translations: &'a TranslationTable) -> Self {
        Self {
            language,
            translations,
        }
    }

    /// Translated UI string for `key`.
    pub fn t(&self, key: &str) -> &'static str {
        self.translations.get(key, self.language)
    }

    /// `path` with the current language pinned, so fragment requests render in
    /// the same language as the page that issued them.
    pub fn localized(&self, path: &str) -> String {
        format!("{}?lang={}", path, self.language.code())
    }
}

/// One tag per skill, in the given order.
pub fn skill_tags(skills: &[&str]) -> Markup {
    html! {
        @for skill in skills {
            span class="skill-tag animate__animated animate__fadeIn" { (skill) }
        }
    }
}

pub fn contact_form(ctx: &RenderContext) -> Markup {
    html! {
        h2 { (ctx.t("contact_me")) }
        form.contact-form
            hx-post=(ctx.localized("/contact-submit"))
            hx-target="#contact-result"
            hx-swap="innerHTML" {
            label for="contact-name" { (ctx.t("name_label")) }
            input #contact-name type="text" name="name" required;
            label for="contact-email" { (ctx.t("email_label")) }
            input #contact-email type="email" name="email" required;
            label for="contact-message" { (ctx.t("message_label")) }
            textarea #contact-message name="message" rows="5" required {}
            button type="submit" { (ctx.t("send_message")) }
        }
        div #contact-result {}
    }
}

pub fn contact_success(ctx: &RenderContext) -> Markup {
    html! {
        p.contact-success { (ctx.t("message_sent")) }
    }
}
