//! Static UI strings shown around the localized content.
//!
//! The table maps a translation key to its per-language display strings. It is
//! built once and shared read-only by every request.

use crate::i18n::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Translation key → (language code → display string).
#[derive(Debug)]
pub struct TranslationTable {
    entries: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

static TABLE: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// Get the process-wide translation table.
    pub fn global() -> &'static TranslationTable {
        TABLE.get_or_init(|| TranslationTable::from_entries(ENTRIES))
    }

    /// Build a table from `(key, [(code, text), ...])` rows.
    pub fn from_entries(rows: &[(&'static str, &[(&'static str, &'static str)])]) -> Self {
        let entries = rows
            .iter()
            .map(|(key, texts)| (*key, texts.iter().copied().collect()))
            .collect();
        Self { entries }
    }

    /// Look up `key` in `language`.
    ///
    /// Falls back to the canonical language when the key has no text for the
    /// requested one, and to an empty string for unknown keys.
    pub fn get(&self, key: &str, language: Language) -> &'static str {
        let Some(texts) = self.entries.get(key) else {
            return "";
        };

        texts
            .get(language.code())
            .or_else(|| texts.get(Language::canonical().code()))
            .copied()
            .unwrap_or("")
    }
}

type Row = (&'static str, &'static [(&'static str, &'static str)]);

const ENTRIES: &[Row] = &[
    // Contact form
    ("name_label", &[("en", "Name"), ("fr", "Nom")]),
    ("email_label", &[("en", "Email"), ("fr", "Email")]),
    ("message_label", &[("en", "Message"), ("fr", "Message")]),
    ("send_message", &[("en", "Send Message"), ("fr", "Envoyer le Message")]),
    ("message_sent", &[("en", "Message sent successfully!"), ("fr", "Message envoyé avec succès !")]),
    ("failed_send", &[("en", "Failed to send email"), ("fr", "Échec de l'envoi de l'email")]),
    ("all_fields_required", &[("en", "All fields are required"), ("fr", "Tous les champs sont requis")]),
    // Lazy-loaded section placeholders
    ("loading_experience", &[("en", "Loading experience..."), ("fr", "Chargement de l'expérience...")]),
    ("loading_education", &[("en", "Loading education..."), ("fr", "Chargement de l'éducation...")]),
    ("loading_projects", &[("en", "Loading projects..."), ("fr", "Chargement des projets...")]),
    ("loading_contact", &[("en", "Loading contact form..."), ("fr", "Chargement du formulaire de contact...")]),
    ("loading_stats", &[("en", "Loading stats..."), ("fr", "Chargement des statistiques...")]),
    // Section headings
    ("professional_experience", &[("en", "Professional Experience"), ("fr", "Expérience Professionnelle")]),
    ("education", &[("en", "Education"), ("fr", "Éducation")]),
    ("personal_projects", &[("en", "Personal Projects"), ("fr", "Projets Personnels")]),
    ("skills", &[("en", "Skills"), ("fr", "Compétences")]),
    ("contact_me", &[("en", "Contact Me"), ("fr", "Contactez-Moi")]),
    ("filter_skills", &[("en", "Filter skills..."), ("fr", "Filtrer les compétences...")]),
    // Navigation
    ("experience", &[("en", "Experience"), ("fr", "Expérience")]),
    ("projects", &[("en", "Projects"), ("fr", "Projets")]),
    ("contact", &[("en", "Contact"), ("fr", "Contact")]),
    // Experience toggles and project links
    ("show_details", &[("en", "Show details"), ("fr", "Voir les détails")]),
    ("hide_details", &[("en", "Hide details"), ("fr", "Masquer les détails")]),
    ("view_on_github", &[("en", "View on GitHub"), ("fr", "Voir sur GitHub")]),
    ("stars", &[("en", "Stars"), ("fr", "Étoiles")]),
    ("forks", &[("en", "Forks"), ("fr", "Forks")]),
    ("toggle_theme", &[("en", "Toggle dark mode"), ("fr", "Basculer le mode sombre")]),
];
