use serde::Serialize;
use std::fmt;

/// Roles seeded at startup when missing.
pub const DEFAULT_ROLES: [&str; 3] = ["Administrator", "Moderator", "User"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

impl Role {
    /// Longest accepted role name, in characters.
    pub const MAX_NAME_LEN: usize = 64;
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Role {}>", self.name)
    }
}

/// A role together with the users it owns, ordered by user id.
#[derive(Debug, Clone, Serialize)]
pub struct RoleGroup {
    pub role: Role,
    pub users: Vec<super::User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        let role = Role {
            id: 1,
            name: "Moderator".to_string(),
        };
        assert_eq!(role.to_string(), "<Role Moderator>");
    }
}
