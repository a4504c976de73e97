mod smtp;

pub use smtp::{MailerError, SmtpMailService, SmtpSettings};
