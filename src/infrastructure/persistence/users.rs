use crate::domain::entities::{Role, User};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::user_repository::UserRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        role_id: row.try_get("role_id")?,
        role_name: row.try_get("role_name")?,
    })
}

fn users_from_rows(rows: &[SqliteRow]) -> DomainResult<Vec<User>> {
    rows.iter()
        .map(|row| user_from_row(row).map_err(DomainError::from))
        .collect()
}

#[async_trait]
impl UserRepository for Database {
    async fn create_user(&self, name: &str, role: Option<&Role>) -> DomainResult<User> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO users (name, role_id) VALUES (?, ?) RETURNING id")
                .bind(name)
                .bind(role.map(|r| r.id))
                .fetch_one(&self.pool)
                .await?;

        Ok(User {
            id,
            name: name.to_string(),
            role_id: role.map(|r| r.id),
            role_name: role.map(|r| r.name.clone()),
        })
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query(
            "SELECT u.id, u.name, u.role_id, r.name AS role_name
             FROM users u
             LEFT JOIN roles r ON r.id = u.role_id
             ORDER BY u.id",
        )
        .fetch_all(&self.pool)
        .await?;

        users_from_rows(&rows)
    }

    async fn list_users_by_role(&self, role_id: i64) -> DomainResult<Vec<User>> {
        let rows = sqlx::query(
            "SELECT u.id, u.name, u.role_id, r.name AS role_name
             FROM users u
             JOIN roles r ON r.id = u.role_id
             WHERE u.role_id = ?
             ORDER BY u.id",
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await?;

        users_from_rows(&rows)
    }

    async fn count_users(&self) -> DomainResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
