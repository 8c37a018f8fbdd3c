use crate::skills::{parse_skill_list, DEFAULT_SKILLS};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 33333;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub port: u16,

    // Content and assets: <site_dir>/data, <site_dir>/static, manifest.json, sw.js
    pub site_dir: PathBuf,

    // Skills shown on the index page and searched by /cv/skills
    pub skills: Vec<String>,

    // GitHub
    pub github_token: Option<String>,
    pub github_api_url: String,

    // Contact form relay (disabled when SMTP_HOST is unset)
    pub smtp: Option<SmtpConfig>,
}

#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
    pub to: String,
}

// Keep the password out of logs
impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("Invalid PORT: {}", v))?,
                Err(_) => DEFAULT_PORT,
            },

            // Content
            site_dir: std::env::var("SITE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("site")),

            skills: std::env::var("SKILLS")
                .ok()
                .map(|v| parse_skill_list(&v))
                .filter(|skills| !skills.is_empty())
                .unwrap_or_else(|| DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()),

            // GitHub
            github_token: std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            github_api_url: std::env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),

            // SMTP
            smtp: SmtpConfig::from_env()?,
        })
    }

    pub fn data_dir(&self) -> PathBuf {
        self.site_dir.join("data")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.site_dir.join("static")
    }
}

impl SmtpConfig {
    /// `None` when `SMTP_HOST` is unset; every other field is then required.
    fn from_env() -> Result<Option<Self>> {
        let host = match std::env::var("SMTP_HOST") {
            Ok(host) if !host.is_empty() => host,
            _ => return Ok(None),
        };

        Ok(Some(Self {
            host,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            username: std::env::var("SMTP_USERNAME").context("SMTP_USERNAME not set")?,
            password: std::env::var("SMTP_PASSWORD").context("SMTP_PASSWORD not set")?,
            from: std::env::var("CONTACT_FROM").context("CONTACT_FROM not set")?,
            to: std::env::var("CONTACT_TO").context("CONTACT_TO not set")?,
        }))
    }
}
