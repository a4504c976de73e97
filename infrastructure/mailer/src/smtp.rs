use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use business::domain::user::errors::UserError;
use business::domain::user::services::{MailService, PasswordResetMail};

/// Port on which the SMTP server expects TLS from the first byte.
const IMPLICIT_TLS_PORT: u16 = 465;

const RESET_SUBJECT: &str = "Password recovery";

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("mailer.invalid_sender")]
    InvalidSender,
    #[error("mailer.transport_error")]
    Transport,
}

pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailService {
    /// Builds the transport. No connection is opened until the first mail.
    pub fn new(settings: SmtpSettings) -> Result<Self, MailerError> {
        let from: Mailbox = settings
            .username
            .parse()
            .map_err(|_| MailerError::InvalidSender)?;

        let builder = if settings.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
        }
        .map_err(|e| {
            tracing::error!("Invalid SMTP relay {}: {}", settings.host, e);
            MailerError::Transport
        })?;

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(settings.username, settings.password))
            .build();

        Ok(Self { transport, from })
    }

    fn compose(&self, mail: &PasswordResetMail) -> Result<Message, UserError> {
        let to: Mailbox = mail.to.parse().map_err(|_| {
            tracing::warn!("Cannot mail invalid address {:?}", mail.to);
            UserError::MailDelivery
        })?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(RESET_SUBJECT)
            .multipart(MultiPart::alternative_plain_html(
                reset_text_body(mail),
                reset_html_body(mail),
            ))
            .map_err(|e| {
                tracing::error!("Cannot build password reset mail: {}", e);
                UserError::MailDelivery
            })
    }
}

fn reset_text_body(mail: &PasswordResetMail) -> String {
    format!(
        "Hello {}, use this link to reset your password: {} (valid for {} hours).",
        mail.name, mail.reset_url, mail.valid_for_hours
    )
}

fn reset_html_body(mail: &PasswordResetMail) -> String {
    let name = html_escape::encode_text(&mail.name);
    let url_text = html_escape::encode_text(&mail.reset_url);
    let url_attr = html_escape::encode_double_quoted_attribute(&mail.reset_url);
    format!(
        "<p>Hello {name},</p>\
         <p>To reset your password, follow this link:</p>\
         <p><a href=\"{url_attr}\">{url_text}</a></p>\
         <p>The link expires in {} hours.</p>",
        mail.valid_for_hours
    )
}

#[async_trait]
impl MailService for SmtpMailService {
    async fn send_password_reset(&self, mail: &PasswordResetMail) -> Result<(), UserError> {
        let message = self.compose(mail)?;

        self.transport.send(message).await.map_err(|e| {
            tracing::error!("SMTP delivery failed: {}", e);
            UserError::MailDelivery
        })?;

        tracing::debug!("Password reset mail handed to SMTP relay");
        Ok(())
    }
}
