use crate::application::services::RegistrationService;
use crate::config::{Config, ConfigError};
use crate::domain::errors::DomainError;
use crate::domain::ports::role_repository::RoleRepository;
use crate::domain::ports::user_repository::UserRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database unavailable: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to seed default roles: {0}")]
    Seed(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Connects to the store, creates the schema and seeds the default roles.
/// Must succeed before the server accepts connections.
pub async fn initialize_database(config: &Config) -> Result<Database, BootstrapError> {
    let db = Database::connect(&config.database_url, config.database_max_connections).await?;
    tracing::info!("Database connection established");

    db.init_schema().await?;
    tracing::info!("Database schema ready");

    let created = registration_service(&db).seed_default_roles().await?;
    tracing::info!("Default roles checked ({} created)", created);

    Ok(db)
}

pub fn registration_service(db: &Database) -> RegistrationService {
    RegistrationService::new(
        Arc::new(db.clone()) as Arc<dyn RoleRepository>,
        Arc::new(db.clone()) as Arc<dyn UserRepository>,
    )
}

pub fn build_app_state(db: Database, config: &Config) -> Result<AppState, BootstrapError> {
    let cookie_key = Key::try_from(config.session_secret.as_bytes())
        .map_err(|_| ConfigError::SessionSecretTooShort)?;

    Ok(AppState {
        registration_service: registration_service(&db),
        cookie_key,
    })
}
