//! Errors surfaced to HTTP clients.
//!
//! Content-load failures never reach this type: they degrade to fallback or
//! empty content inside [`crate::content::ContentStore::load`].

use crate::i18n::{Language, TranslationTable};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The experience id is not a non-negative integer.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// The experience id is past the end of the list.
    #[error("id {id} out of range (len {len})")]
    IdOutOfRange { id: usize, len: usize },

    /// A repository path segment is not a GitHub name.
    #[error("invalid repository name: {0}")]
    InvalidRepo(String),

    /// A contact form field is empty.
    #[error("missing contact field")]
    MissingFields(Language),

    /// The repository stats API could not be reached.
    #[error("stats upstream unavailable: {0}")]
    StatsUnavailable(String),

    /// The contact message could not be delivered.
    #[error("mail delivery failed: {reason}")]
    SendFailed { language: Language, reason: String },
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId(_)
            | Self::IdOutOfRange { .. }
            | Self::InvalidRepo(_)
            | Self::MissingFields(_) => StatusCode::BAD_REQUEST,
            Self::StatsUnavailable(_) | Self::SendFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Plain-text body shown to the client. Never includes upstream details.
    pub fn public_message(&self) -> &'static str {
        let translations = TranslationTable::global();
        match self {
            Self::InvalidId(_) => "Invalid ID",
            Self::IdOutOfRange { .. } => "ID out of range",
            Self::InvalidRepo(_) => "Invalid repository",
            Self::MissingFields(language) => translations.get("all_fields_required", *language),
            Self::StatsUnavailable(_) => "Failed to fetch stats",
            Self::SendFailed { language, .. } => translations.get("failed_send", *language),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.public_message()).into_response()
    }
}
