//! The closed set of notification types.

use std::str::FromStr;

use guild_core::error::CoreError;

/// A notification type and its implied recipient set.
///
/// Every variant renders a fixed bilingual template; adding a variant
/// without a template is a compile error, so there is no default-case
/// runtime failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A new membership application arrived; notifies every admin.
    DirectorSignup,
    /// The application was approved; notifies the member.
    DirectorApproved,
    /// The application was rejected; notifies the member.
    DirectorRejected,
}

impl NotificationKind {
    /// The tag used on the wire and in logs.
    pub const fn wire_tag(self) -> &'static str {
        match self {
            NotificationKind::DirectorSignup => "new_director_signup",
            NotificationKind::DirectorApproved => "director_approved",
            NotificationKind::DirectorRejected => "director_rejected",
        }
    }

    /// Whether the recipients are the admins rather than the member.
    pub const fn targets_admins(self) -> bool {
        matches!(self, NotificationKind::DirectorSignup)
    }
}

impl FromStr for NotificationKind {
    type Err = CoreError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "new_director_signup" => Ok(NotificationKind::DirectorSignup),
            "director_approved" => Ok(NotificationKind::DirectorApproved),
            "director_rejected" => Ok(NotificationKind::DirectorRejected),
            other => Err(CoreError::Validation(format!(
                "Unknown notification type '{other}'. Must be one of: \
                 new_director_signup, director_approved, director_rejected"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tags_round_trip() {
        for kind in [
            NotificationKind::DirectorSignup,
            NotificationKind::DirectorApproved,
            NotificationKind::DirectorRejected,
        ] {
            assert_eq!(kind.wire_tag().parse::<NotificationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_tag_is_a_validation_error() {
        let err = "director_promoted".parse::<NotificationKind>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("director_promoted"));
    }

    #[test]
    fn only_signup_targets_admins() {
        assert!(NotificationKind::DirectorSignup.targets_admins());
        assert!(!NotificationKind::DirectorApproved.targets_admins());
        assert!(!NotificationKind::DirectorRejected.targets_admins());
    }
}
