//! The mail transport seam.
//!
//! [`Dispatcher`](crate::Dispatcher) talks to a [`Mailer`] trait object so
//! tests can inject a recording stub and deployments without SMTP
//! configuration degrade to a logging no-op.

use async_trait::async_trait;

use crate::email::EmailError;
use crate::template::MailContent;

/// Sends one rendered mail to one recipient address.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, content: &MailContent) -> Result<(), EmailError>;
}

/// Fallback mailer used when SMTP is not configured.
///
/// Drops every message with a warning so the surrounding workflow still
/// succeeds in environments without a relay (local development, CI).
pub struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, to: &str, content: &MailContent) -> Result<(), EmailError> {
        tracing::warn!(
            to,
            subject = %content.subject,
            "Email delivery not configured (SMTP_HOST unset); dropping message"
        );
        Ok(())
    }
}
