//! Well-known role name constants.
//!
//! Stored verbatim in the `users.role` column; a user's role is fixed at
//! account creation.

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_TEACHER: &str = "teacher";
pub const ROLE_SUPERADMIN: &str = "superadmin";

/// Whether `role` is one of the known role names.
pub fn is_valid_role(role: &str) -> bool {
    matches!(role, ROLE_STUDENT | ROLE_TEACHER | ROLE_SUPERADMIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_are_valid() {
        assert!(is_valid_role(ROLE_STUDENT));
        assert!(is_valid_role(ROLE_TEACHER));
        assert!(is_valid_role(ROLE_SUPERADMIN));
    }

    #[test]
    fn test_unknown_role_is_invalid() {
        assert!(!is_valid_role("admin"));
        assert!(!is_valid_role(""));
        assert!(!is_valid_role("Student"));
    }
}
