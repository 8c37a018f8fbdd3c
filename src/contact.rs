//! Contact form validation and mail relay.

use crate::config::SmtpConfig;
use futures::future::BoxFuture;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Raw form body of `POST /contact-submit`. Absent fields are empty.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A contact submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("all fields are required")]
    MissingFields,

    #[error("mail relay is not configured")]
    NotConfigured,

    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

impl ContactForm {
    /// Build from decoded form pairs. The first value of each field wins and
    /// unknown fields are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut name = None;
        let mut email = None;
        let mut message = None;

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut name,
                "email" => &mut email,
                "message" => &mut message,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            message: message.unwrap_or_default(),
        }
    }

    /// Trim every field and require all three to be non-empty.
    pub fn validate(self) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("Contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            self.name, self.email, self.message
        )
    }
}

/// Delivers validated contact messages.
pub trait Mailer: Send + Sync {
    fn send<'a>(&'a self, message: &'a ContactMessage) -> BoxFuture<'a, Result<(), ContactError>>;
}

/// Relays messages through an SMTP submission server (STARTTLS).
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, ContactError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: parse_mailbox(&config.from)?,
            to: parse_mailbox(&config.to)?,
        })
    }
}

impl Mailer for SmtpMailer {
    fn send<'a>(&'a self, message: &'a ContactMessage) -> BoxFuture<'a, Result<(), ContactError>> {
        Box::pin(async move {
            let email = compose(&self.from, &self.to, message)?;
            self.transport.send(email).await?;
            info!("Contact message from {} relayed", message.email);
            Ok(())
        })
    }
}

/// Used when no SMTP server is configured: every delivery fails.
pub struct DisabledMailer;

impl Mailer for DisabledMailer {
    fn send<'a>(&'a self, _message: &'a ContactMessage) -> BoxFuture<'a, Result<(), ContactError>> {
        Box::pin(async { Err(ContactError::NotConfigured) })
    }
}

/// Pick the mailer for the given SMTP settings.
pub fn mailer_from_config(smtp: Option<&SmtpConfig>) -> Result<Arc<dyn Mailer>, ContactError> {
    match smtp {
        Some(config) => {
            info!("Contact form relays through {}:{}", config.host, config.port);
            Ok(Arc::new(SmtpMailer::new(config)?))
        }
        None => {
            warn!("SMTP_HOST not set, contact form submissions will fail");
            Ok(Arc::new(DisabledMailer))
        }
    }
}

/// Build the outbound email. The submitter becomes `Reply-To` when their
/// address parses as a mailbox.
pub fn compose(from: &Mailbox, to: &Mailbox, message: &ContactMessage) -> Result<Message, ContactError> {
    let mut builder = Message::builder()
        .from(from.clone())
        .to(to.clone())
        .subject(message.subject())
        .header(ContentType::TEXT_PLAIN);

    match message.email.parse::<Mailbox>() {
        Ok(reply_to) => builder = builder.reply_to(reply_to),
        Err(e) => warn!("Not setting Reply-To for '{}': {}", message.email, e),
    }

    Ok(builder.body(message.body())?)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, ContactError> {
    address
        .parse()
        .map_err(|e: lettre::address::AddressError| ContactError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn sample_message() -> ContactMessage {
        form("Ada", "ada@example.com", "Hello there").validate().unwrap()
    }

    fn formatted(email: &Message) -> String {
        String::from_utf8_lossy(&email.formatted()).to_string()
    }

    // ==================== validate Tests ====================

    #[test]
    fn test_validate_success_trims_fields() {
        let message = form("  Ada ", "ada@example.com\n", " Hi ").validate().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "Hi");
    }

    #[test]
    fn test_validate_rejects_each_empty_field() {
        for case in [
            form("", "a@b.c", "hi"),
            form("Ada", "", "hi"),
            form("Ada", "a@b.c", ""),
            form("   ", "a@b.c", "hi"),
        ] {
            assert!(matches!(case.validate(), Err(ContactError::MissingFields)));
        }
    }

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_form_absent_fields_default_to_empty() {
        let parsed = ContactForm::from_pairs(pairs(&[("name", "Ada")]));
        assert_eq!(parsed.name, "Ada");
        assert!(parsed.email.is_empty());
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn test_form_first_value_wins_and_unknown_fields_ignored() {
        let parsed = ContactForm::from_pairs(pairs(&[
            ("name", "Ada"),
            ("name", "Grace"),
            ("email", "ada@example.com"),
            ("subject", "ignored"),
            ("message", "Hi"),
        ]));
        assert_eq!(parsed.name, "Ada");
        assert_eq!(parsed.validate().unwrap().message, "Hi");
    }

    // ==================== compose Tests ====================

    #[test]
    fn test_compose_sets_subject_and_body() {
        let from: Mailbox = "site@example.com".parse().unwrap();
        let to: Mailbox = "owner@example.com".parse().unwrap();

        let email = compose(&from, &to, &sample_message()).unwrap();
        let raw = formatted(&email);

        assert!(raw.contains("Subject: Contact from Ada"));
        assert!(raw.contains("Reply-To: ada@example.com"));
        assert!(raw.contains("To: owner@example.com"));
        assert!(raw.contains("Name: Ada"));
        assert!(raw.contains("Message: Hello there"));
    }

    #[test]
    fn test_compose_skips_unparseable_reply_to() {
        let from: Mailbox = "site@example.com".parse().unwrap();
        let to: Mailbox = "owner@example.com".parse().unwrap();
        let message = form("Ada", "not an address", "Hello").validate().unwrap();

        let raw = formatted(&compose(&from, &to, &message).unwrap());
        assert!(!raw.contains("Reply-To"));
        assert!(raw.contains("Email: not an address"));
    }

    #[test]
    fn test_parse_mailbox_rejects_garbage() {
        let err = parse_mailbox("nope").unwrap_err();
        assert!(matches!(err, ContactError::InvalidAddress { .. }));
    }

    // ==================== Mailer Tests ====================

    #[tokio::test]
    async fn test_disabled_mailer_always_fails() {
        let result = DisabledMailer.send(&sample_message()).await;
        assert!(matches!(result, Err(ContactError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_mailer_from_config_without_smtp_is_disabled() {
        let mailer = mailer_from_config(None).unwrap();
        assert!(mailer.send(&sample_message()).await.is_err());
    }
}
