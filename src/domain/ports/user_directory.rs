use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::models::user::User;

/// The identity directory the assignment engine resolves usernames against.
/// The engine reads users and their role sets; it never mutates them.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    async fn save_user(&self, user: &User) -> DomainResult<()>;

    async fn list_users(&self) -> DomainResult<Vec<User>>;

    async fn count(&self) -> DomainResult<i64>;

    async fn delete_all(&self) -> DomainResult<()>;
}
