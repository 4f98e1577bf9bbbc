use async_trait::async_trait;
use sqlx::Row;

use crate::database::Database;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::user_directory::UserDirectory;
use crate::models::user::{Role, User};

impl Database {
    pub(crate) async fn load_roles(&self, user_id: &str) -> DomainResult<Vec<Role>> {
        let rows = sqlx::query("SELECT role FROM user_roles WHERE user_id = ? ORDER BY role")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        let mut roles = Vec::new();
        for row in rows {
            let role_str: String = row.try_get("role")?;
            match role_str.parse::<Role>() {
                Ok(role) => roles.push(role),
                Err(_) => continue,
            }
        }

        Ok(roles)
    }
}

#[async_trait]
impl UserDirectory for Database {
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, created_at, updated_at
             FROM users
             WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            let id: String = row.try_get("id")?;
            let roles = self.load_roles(&id).await?;

            Ok(Some(User {
                id,
                username: row.try_get("username")?,
                roles,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn save_user(&self, user: &User) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO users (id, username, created_at, updated_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.created_at)
        .bind(&user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                DomainError::Internal(format!("Username '{}' already exists", user.username))
            } else {
                DomainError::Internal(e.to_string())
            }
        })?;

        for role in &user.roles {
            sqlx::query(
                "INSERT INTO user_roles (user_id, role)
                 VALUES (?, ?)",
            )
            .bind(&user.id)
            .bind(role.to_string())
            .execute(&self.pool)
            .await?;
        }

        tracing::info!("User created: username={}", user.username);
        Ok(())
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query(
            "SELECT id, username, created_at, updated_at
             FROM users
             ORDER BY username",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut users = Vec::new();
        for row in rows {
            let id: String = row.try_get("id")?;
            let roles = self.load_roles(&id).await?;

            users.push(User {
                id,
                username: row.try_get("username")?,
                roles,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            });
        }

        Ok(users)
    }

    async fn count(&self) -> DomainResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("count")?)
    }

    async fn delete_all(&self) -> DomainResult<()> {
        sqlx::query("DELETE FROM user_roles")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        Ok(())
    }
}
