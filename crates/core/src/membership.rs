//! Membership lifecycle constants and validation functions.
//!
//! Defines the valid verification and payment status values for a membership
//! application and provides validation helpers used by both the DB and API
//! layers. Status transitions are admin-triggered only; the single invariant
//! is that only the transition *into* `approved` fires a notification email.

/// Application has been submitted and awaits an admin decision.
pub const VERIFICATION_PENDING: &str = "pending";

/// Application was approved; the member appears in the public directory.
pub const VERIFICATION_APPROVED: &str = "approved";

/// Application was rejected.
pub const VERIFICATION_REJECTED: &str = "rejected";

/// All valid verification status values.
pub const VALID_VERIFICATION_STATUSES: &[&str] = &[
    VERIFICATION_PENDING,
    VERIFICATION_APPROVED,
    VERIFICATION_REJECTED,
];

/// Membership fee has not been received.
pub const PAYMENT_UNPAID: &str = "unpaid";

/// Membership fee has been received.
pub const PAYMENT_PAID: &str = "paid";

/// All valid payment status values.
pub const VALID_PAYMENT_STATUSES: &[&str] = &[PAYMENT_UNPAID, PAYMENT_PAID];

/// Thai notification language tag.
pub const LANGUAGE_TH: &str = "th";

/// English notification language tag.
pub const LANGUAGE_EN: &str = "en";

/// Validate that a verification status string is one of the accepted values.
pub fn validate_verification_status(status: &str) -> Result<(), String> {
    if VALID_VERIFICATION_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid verification status '{status}'. Must be one of: {}",
            VALID_VERIFICATION_STATUSES.join(", ")
        ))
    }
}

/// Validate that a payment status string is one of the accepted values.
pub fn validate_payment_status(status: &str) -> Result<(), String> {
    if VALID_PAYMENT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid payment status '{status}'. Must be one of: {}",
            VALID_PAYMENT_STATUSES.join(", ")
        ))
    }
}

/// Normalize a notification language preference, defaulting to Thai.
pub fn normalize_language(language: Option<&str>) -> &'static str {
    match language {
        Some(LANGUAGE_EN) => LANGUAGE_EN,
        _ => LANGUAGE_TH,
    }
}

/// Whether a status update fires the approval notification email.
///
/// Only the transition *into* `approved` notifies the member. Re-applying
/// `approved` to an already-approved member does not, and no reverse
/// transition sends anything.
pub fn fires_approval_email(previous: &str, requested: Option<&str>) -> bool {
    requested == Some(VERIFICATION_APPROVED) && previous != VERIFICATION_APPROVED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_verification_statuses_accepted() {
        assert!(validate_verification_status(VERIFICATION_PENDING).is_ok());
        assert!(validate_verification_status(VERIFICATION_APPROVED).is_ok());
        assert!(validate_verification_status(VERIFICATION_REJECTED).is_ok());
    }

    #[test]
    fn test_invalid_verification_status_rejected() {
        let result = validate_verification_status("verified");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid verification status"));
    }

    #[test]
    fn test_empty_verification_status_rejected() {
        assert!(validate_verification_status("").is_err());
    }

    #[test]
    fn test_valid_payment_statuses_accepted() {
        assert!(validate_payment_status(PAYMENT_UNPAID).is_ok());
        assert!(validate_payment_status(PAYMENT_PAID).is_ok());
    }

    #[test]
    fn test_invalid_payment_status_rejected() {
        assert!(validate_payment_status("overdue").is_err());
    }

    #[test]
    fn test_approval_transition_fires_email() {
        assert!(fires_approval_email(
            VERIFICATION_PENDING,
            Some(VERIFICATION_APPROVED)
        ));
        assert!(fires_approval_email(
            VERIFICATION_REJECTED,
            Some(VERIFICATION_APPROVED)
        ));
    }

    #[test]
    fn test_rejection_transition_fires_nothing() {
        assert!(!fires_approval_email(
            VERIFICATION_PENDING,
            Some(VERIFICATION_REJECTED)
        ));
    }

    #[test]
    fn test_reapproving_fires_nothing() {
        assert!(!fires_approval_email(
            VERIFICATION_APPROVED,
            Some(VERIFICATION_APPROVED)
        ));
    }

    #[test]
    fn test_update_without_verification_change_fires_nothing() {
        assert!(!fires_approval_email(VERIFICATION_PENDING, None));
    }

    #[test]
    fn test_language_defaults_to_thai() {
        assert_eq!(normalize_language(None), LANGUAGE_TH);
        assert_eq!(normalize_language(Some("fr")), LANGUAGE_TH);
        assert_eq!(normalize_language(Some(LANGUAGE_EN)), LANGUAGE_EN);
        assert_eq!(normalize_language(Some(LANGUAGE_TH)), LANGUAGE_TH);
    }
}
