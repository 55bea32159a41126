use crate::domain::entities::Role;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// All roles ordered by name.
    async fn list_roles(&self) -> DomainResult<Vec<Role>>;
    async fn get_role_by_id(&self, id: i64) -> DomainResult<Option<Role>>;
    /// Exact, case-sensitive lookup.
    async fn get_role_by_name(&self, name: &str) -> DomainResult<Option<Role>>;
    async fn create_role(&self, name: &str) -> DomainResult<Role>;
    /// Deletes the role and every user that references it.
    async fn delete_role(&self, id: i64) -> DomainResult<()>;
    async fn count_roles(&self) -> DomainResult<i64>;
}
