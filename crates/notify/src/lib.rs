//! Notification infrastructure for the membership platform.
//!
//! Building blocks:
//!
//! - [`NotificationKind`] — the closed set of notification types, parsed
//!   from their wire tags.
//! - [`template`] — fixed bilingual HTML subject/body rendering, exhaustive
//!   over every kind.
//! - [`Mailer`] — the transport seam; [`SmtpMailer`] is the production
//!   implementation on lettre's async SMTP transport.
//! - [`Dispatcher`] — resolves recipients (the member's own address, or
//!   every admin) and sends.

pub mod dispatcher;
pub mod email;
pub mod kind;
pub mod mailer;
pub mod template;

pub use dispatcher::{DispatchError, Dispatcher};
pub use email::{EmailConfig, EmailError, SmtpMailer};
pub use kind::NotificationKind;
pub use mailer::{Mailer, NullMailer};
pub use template::MailContent;
