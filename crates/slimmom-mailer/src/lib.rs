//! # slimmom-mailer
//!
//! Transactional email delivery over SMTP with STARTTLS. The only message
//! the backend sends today is the address-verification email issued at
//! registration and on resend.

pub mod template;

use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::info;

use slimmom_core::config::mail::MailConfig;
use slimmom_core::error::AppError;
use slimmom_core::result::AppResult;

/// Sends transactional emails for the Slim Mom backend.
///
/// The SMTP transport is built once at startup and reused; `lettre` pools
/// connections internally.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    app_url: String,
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("from_address", &self.from_address)
            .field("app_url", &self.app_url)
            .finish()
    }
}

impl Mailer {
    /// Builds a mailer from configuration.
    ///
    /// `app_url` is the public base URL of the deployment; verification
    /// links are rooted there.
    pub fn new(config: &MailConfig, app_url: &str) -> AppResult<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| {
                AppError::configuration(format!("Invalid SMTP relay configuration: {e}"))
            })?
            .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from_address: config.from_address.clone(),
            app_url: app_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends the address-verification email for a pending registration.
    pub async fn send_verification(
        &self,
        to_email: &str,
        name: &str,
        verification_token: &str,
    ) -> AppResult<()> {
        let link = format!("{}/api/auth/verify/{}", self.app_url, verification_token);
        let body = template::verification_body(name, &link);

        let message = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| AppError::mail(format!("Invalid sender address: {e}")))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::mail(format!("Invalid recipient address: {e}")))?)
            .subject("Slim Mom: please verify your email address")
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| AppError::mail(format!("Failed to build email: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::mail(format!("Failed to send email: {e}")))?;

        info!(to = to_email, "verification email sent");
        Ok(())
    }
}
