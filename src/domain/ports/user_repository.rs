use crate::domain::entities::{Role, User};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, name: &str, role: Option<&Role>) -> DomainResult<User>;
    /// All users ordered by id.
    async fn list_users(&self) -> DomainResult<Vec<User>>;
    /// Users owned by one role, ordered by id.
    async fn list_users_by_role(&self, role_id: i64) -> DomainResult<Vec<User>>;
    async fn count_users(&self) -> DomainResult<i64>;
}
