//! Localized portfolio/CV web server.
//!
//! Serves a profile page in English or French, with the experience,
//! education, projects and contact sections delivered as HTML fragments,
//! a GitHub repository stats proxy and a contact form relayed by email.

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod github;
pub mod i18n;
pub mod render;
pub mod server;
pub mod skills;
