//! Well-known web role name constants.
//!
//! These must match the CHECK constraint in the users migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";

/// Whether a web role carries administrative capability.
pub fn is_admin(web_role: &str) -> bool {
    web_role == ROLE_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_is_admin() {
        assert!(is_admin(ROLE_ADMIN));
    }

    #[test]
    fn member_role_is_not_admin() {
        assert!(!is_admin(ROLE_MEMBER));
        assert!(!is_admin(""));
        assert!(!is_admin("Admin"));
    }
}
