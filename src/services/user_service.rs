use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::audit_sink::AuditSink;
use crate::domain::ports::user_directory::UserDirectory;
use crate::models::audit::EventKind;
use crate::models::user::{Role, User};

/// Thin wrapper over the identity directory. Username resolution lives here
/// so the assignment service never has to know about usernames it cannot
/// resolve.
#[derive(Clone)]
pub struct UserService {
    directory: Arc<dyn UserDirectory>,
    audit: Arc<dyn AuditSink>,
}

impl UserService {
    pub fn new(directory: Arc<dyn UserDirectory>, audit: Arc<dyn AuditSink>) -> Self {
        Self { directory, audit }
    }

    pub async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        self.directory.find_by_username(username).await
    }

    pub async fn create_user(
        &self,
        username: String,
        roles: Vec<Role>,
        acting_user: &str,
    ) -> DomainResult<User> {
        if roles.is_empty() {
            return Err(DomainError::MalformedInput(
                "A user must hold at least one role".to_string(),
            ));
        }

        let user = User::new(username, roles);
        self.directory.save_user(&user).await?;

        if let Err(e) = self.audit.record_event(EventKind::UserCreated, acting_user).await {
            tracing::warn!("Failed to record audit event user_created: {}", e);
        }

        Ok(user)
    }

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.directory.list_users().await
    }

    pub async fn count(&self) -> DomainResult<i64> {
        self.directory.count().await
    }
}
