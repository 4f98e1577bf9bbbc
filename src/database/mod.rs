pub mod assignments;
pub mod audit;
pub mod users;

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

pub struct Database {
    pool: AnyPool,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = AnyPoolOptions::new()
            .max_connections(20)
            .min_connections(5)
            .connect(database_url)
            .await?;

        // Enable foreign keys for SQLite
        if database_url.starts_with("sqlite") {
            sqlx::query("PRAGMA foreign_keys = ON")
                .execute(&pool)
                .await?;
        }

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Creates the schema if it does not exist yet. Idempotent, safe to run
    /// on every startup.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_username ON users(username)")
            .execute(&self.pool)
            .await
            .ok();

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS user_roles (
                user_id TEXT NOT NULL,
                role TEXT NOT NULL,
                PRIMARY KEY (user_id, role),
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
            )",
        )
        .execute(&self.pool)
        .await?;

        // No UNIQUE constraint on (patient_username, advocate_username):
        // domain-equal duplicates are accepted by the store.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS advocate_assignments (
                id TEXT PRIMARY KEY,
                patient_username TEXT NOT NULL,
                advocate_username TEXT NOT NULL,
                office_visit_permission INTEGER NOT NULL DEFAULT 0,
                billing_permission INTEGER NOT NULL DEFAULT 0,
                prescription_permission INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_assignments_patient
             ON advocate_assignments(patient_username)",
        )
        .execute(&self.pool)
        .await
        .ok();

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_assignments_advocate
             ON advocate_assignments(advocate_username)",
        )
        .execute(&self.pool)
        .await
        .ok();

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS audit_events (
                id TEXT PRIMARY KEY,
                event_kind TEXT NOT NULL,
                acting_user TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
