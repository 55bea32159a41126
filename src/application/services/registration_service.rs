use crate::domain::entities::{Role, RoleGroup, User, DEFAULT_ROLES};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::role_repository::RoleRepository;
use crate::domain::ports::user_repository::UserRepository;
use std::sync::Arc;

/// Everything the home page lists.
#[derive(Debug, Clone)]
pub struct Overview {
    /// Ordered by name.
    pub roles: Vec<Role>,
    /// Ordered by id.
    pub users: Vec<User>,
    /// One entry per role, in role order.
    pub roles_with_users: Vec<RoleGroup>,
}

#[derive(Clone)]
pub struct RegistrationService {
    role_repo: Arc<dyn RoleRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl RegistrationService {
    pub fn new(role_repo: Arc<dyn RoleRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            role_repo,
            user_repo,
        }
    }

    pub async fn overview(&self) -> DomainResult<Overview> {
        let roles = self.role_repo.list_roles().await?;
        let users = self.user_repo.list_users().await?;

        let mut roles_with_users = Vec::with_capacity(roles.len());
        for role in &roles {
            let owned = self.user_repo.list_users_by_role(role.id).await?;
            roles_with_users.push(RoleGroup {
                role: role.clone(),
                users: owned,
            });
        }

        Ok(Overview {
            roles,
            users,
            roles_with_users,
        })
    }

    /// Registers a user under an optional role id taken straight from the form.
    ///
    /// A missing or blank `role` means "no role", and so does an id that is not
    /// a number or names no existing role.
    pub async fn register_user(&self, name: &str, role: Option<&str>) -> DomainResult<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "Please enter the user's name.".to_string(),
            ));
        }
        if name.chars().count() > User::MAX_NAME_LEN {
            return Err(DomainError::ValidationError(format!(
                "User name must be at most {} characters.",
                User::MAX_NAME_LEN
            )));
        }

        let role = match role.map(str::trim).filter(|r| !r.is_empty()) {
            Some(raw) => self.resolve_role(raw).await?,
            None => None,
        };

        self.user_repo.create_user(name, role.as_ref()).await
    }

    async fn resolve_role(&self, raw: &str) -> DomainResult<Option<Role>> {
        let Ok(id) = raw.parse::<i64>() else {
            tracing::warn!("Ignoring non-numeric role id {:?}", raw);
            return Ok(None);
        };

        let role = self.role_repo.get_role_by_id(id).await?;
        if role.is_none() {
            tracing::warn!("Ignoring unknown role id {}", id);
        }
        Ok(role)
    }

    pub async fn add_role(&self, name: &str) -> DomainResult<Role> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "Role name cannot be empty.".to_string(),
            ));
        }
        if name.chars().count() > Role::MAX_NAME_LEN {
            return Err(DomainError::ValidationError(format!(
                "Role name must be at most {} characters.",
                Role::MAX_NAME_LEN
            )));
        }

        if self.role_repo.get_role_by_name(name).await?.is_some() {
            return Err(DomainError::Conflict("Role already exists.".to_string()));
        }

        self.role_repo.create_role(name).await
    }

    /// Administrative removal; the role's users go with it.
    pub async fn remove_role(&self, id: i64) -> DomainResult<()> {
        self.role_repo.delete_role(id).await
    }

    /// Inserts whichever default roles are missing and returns how many were added.
    pub async fn seed_default_roles(&self) -> DomainResult<usize> {
        let mut created = 0;
        for name in DEFAULT_ROLES {
            if self.role_repo.get_role_by_name(name).await?.is_none() {
                let role = self.role_repo.create_role(name).await?;
                tracing::info!("Seeded default role {}", role);
                created += 1;
            }
        }
        Ok(created)
    }
}
