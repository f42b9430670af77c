//! Transactional mail configuration.

use serde::{Deserialize, Serialize};

/// SMTP mailer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (STARTTLS).
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Optional SMTP username.
    #[serde(default)]
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    #[serde(default)]
    pub smtp_password: Option<String>,
    /// RFC 5322 "From" address for outgoing mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "\"Slim Mom Notification\" <noreply.slimmom@gmail.com>".to_string()
}
