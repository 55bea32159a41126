use roster::application::services::RegistrationService;
use roster::bootstrap;
use roster::infrastructure::persistence::Database;

/// Fresh in-memory database with the schema created and nothing seeded.
pub async fn setup_test_db() -> Database {
    // One connection keeps every query on the same in-memory database
    let db = Database::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to connect to test database");

    db.init_schema()
        .await
        .expect("Failed to create test schema");

    db
}

/// Test database with the default roles in place, as after startup.
pub async fn setup_seeded_db() -> Database {
    let db = setup_test_db().await;
    service(&db)
        .seed_default_roles()
        .await
        .expect("Failed to seed default roles");
    db
}

pub fn service(db: &Database) -> RegistrationService {
    bootstrap::registration_service(db)
}
