//! Recipient resolution and notification dispatch.
//!
//! [`Dispatcher`] is the single entry point the API layer calls: it loads
//! the member the notification is about, resolves the recipient set
//! (the member's own address, or every admin for signup notifications),
//! renders the bilingual template, and sends through the configured
//! [`Mailer`]. Delivery is awaited so failures propagate to the caller.

use std::sync::Arc;

use guild_core::membership::LANGUAGE_EN;
use guild_core::types::DbId;
use guild_db::models::member::Member;
use guild_db::repositories::MemberRepo;
use sqlx::PgPool;

use crate::email::{EmailConfig, EmailError, SmtpMailer};
use crate::kind::NotificationKind;
use crate::mailer::{Mailer, NullMailer};
use crate::template::{self, MailContent};

/// Error type for notification dispatch failures.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The member the notification is about does not exist.
    #[error("Member not found: {id}")]
    MemberNotFound { id: DbId },

    /// The member has no email address to deliver to.
    #[error("Member {id} has no email address")]
    MissingEmail { id: DbId },

    /// Recipient lookup failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The transport rejected or failed to deliver the mail.
    #[error("Email delivery failed: {0}")]
    Email(#[from] EmailError),
}

/// Resolves recipients and sends notification mail.
pub struct Dispatcher {
    mailer: Arc<dyn Mailer>,
}

impl Dispatcher {
    /// Create a dispatcher with an explicit mailer (tests inject a stub).
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Build a dispatcher from the environment: SMTP when configured,
    /// otherwise the logging no-op mailer.
    pub fn from_env() -> Self {
        match EmailConfig::from_env() {
            Some(config) => Self::new(Arc::new(SmtpMailer::new(config))),
            None => {
                tracing::warn!("SMTP_HOST not set; outbound email is disabled");
                Self::new(Arc::new(NullMailer))
            }
        }
    }

    /// Send the notification of `kind` concerning `member_id`.
    ///
    /// Signup notifications go to every admin address; approval/rejection
    /// notifications go to the member, in the member's preferred language.
    pub async fn dispatch(
        &self,
        pool: &PgPool,
        kind: NotificationKind,
        member_id: DbId,
    ) -> Result<(), DispatchError> {
        let member = MemberRepo::find_by_id(pool, member_id)
            .await?
            .ok_or(DispatchError::MemberNotFound { id: member_id })?;

        let content = template::render(
            kind,
            display_name(&member),
            &member.occupation,
            &member.language,
        );

        if kind.targets_admins() {
            let recipients = MemberRepo::admin_emails(pool).await?;
            if recipients.is_empty() {
                tracing::warn!(
                    kind = kind.wire_tag(),
                    member_id,
                    "No admin recipients for notification"
                );
                return Ok(());
            }
            for recipient in &recipients {
                self.mailer.send(recipient, &content).await?;
            }
        } else {
            if member.email.is_empty() {
                return Err(DispatchError::MissingEmail { id: member_id });
            }
            self.mailer.send(&member.email, &content).await?;
        }

        tracing::info!(kind = kind.wire_tag(), member_id, "Notification dispatched");
        Ok(())
    }

    /// Send the approval template directly to an explicit address.
    ///
    /// Backs both the admin approval workflow (which already holds the
    /// member row) and the standalone approval-email endpoint.
    pub async fn send_approval(
        &self,
        to: &str,
        name: &str,
        occupation: &str,
        language: &str,
    ) -> Result<(), DispatchError> {
        let content = template::render(NotificationKind::DirectorApproved, name, occupation, language);
        self.mailer.send(to, &content).await?;
        tracing::info!(to, "Approval email sent");
        Ok(())
    }
}

/// The member's name in their preferred language, falling back to the Thai
/// full name when the English one is blank.
fn display_name(member: &Member) -> &str {
    if member.language == LANGUAGE_EN && !member.fullname_en.is_empty() {
        &member.fullname_en
    } else {
        &member.fullname_th
    }
}
