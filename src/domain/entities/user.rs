use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role_id: Option<i64>,
    /// Name of the owning role, joined in when the user is loaded.
    pub role_name: Option<String>,
}

impl User {
    /// Longest accepted user name, in characters.
    pub const MAX_NAME_LEN: usize = 256;
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<User {} - {}>",
            self.name,
            self.role_name.as_deref().unwrap_or("NoRole")
        )
    }
}
