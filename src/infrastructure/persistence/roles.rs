use crate::domain::entities::Role;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::role_repository::RoleRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

fn role_from_row(row: &SqliteRow) -> Result<Role, sqlx::Error> {
    Ok(Role {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

#[async_trait]
impl RoleRepository for Database {
    async fn list_roles(&self) -> DomainResult<Vec<Role>> {
        let rows = sqlx::query("SELECT id, name FROM roles ORDER BY name, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| role_from_row(row).map_err(DomainError::from))
            .collect()
    }

    async fn get_role_by_id(&self, id: i64) -> DomainResult<Option<Role>> {
        let row = sqlx::query("SELECT id, name FROM roles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(role_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_role_by_name(&self, name: &str) -> DomainResult<Option<Role>> {
        let row = sqlx::query("SELECT id, name FROM roles WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(role_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn create_role(&self, name: &str) -> DomainResult<Role> {
        let row = sqlx::query("INSERT INTO roles (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(role_from_row(&row)?)
    }

    async fn delete_role(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM roles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("Role with id {} not found", id)));
        }

        Ok(())
    }

    async fn count_roles(&self) -> DomainResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
