use std::sync::Arc;

use crate::api::middleware::AppState;
use crate::config::Config;
use crate::database::Database;
use crate::domain::ports::user_directory::UserDirectory;
use crate::models::user::{Role, User};
use crate::services::{AssignmentService, AuditService, UserService};

/// Ensures the configured admin user exists, so a fresh deployment has an
/// acting identity for directory management.
pub async fn initialize_admin(db: &Database, config: &Config) -> anyhow::Result<()> {
    if db.find_by_username(&config.admin_username).await?.is_none() {
        let admin = User::new(config.admin_username.clone(), vec![Role::Admin]);
        db.save_user(&admin).await?;
        tracing::info!("Admin user created: {}", admin.username);
    }

    Ok(())
}

pub fn build_app_state(db: Arc<Database>) -> AppState {
    AppState {
        user_service: UserService::new(db.clone(), db.clone()),
        assignment_service: AssignmentService::new(db.clone(), db.clone()),
        audit_service: AuditService::new(db),
    }
}
