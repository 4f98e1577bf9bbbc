use async_trait::async_trait;
use sqlx::Row;

use crate::database::Database;
use crate::domain::errors::DomainResult;
use crate::domain::ports::audit_sink::AuditSink;
use crate::models::audit::{AuditEvent, EventKind};

#[async_trait]
impl AuditSink for Database {
    async fn record_event(&self, kind: EventKind, acting_user: &str) -> DomainResult<()> {
        let event = AuditEvent::new(kind, acting_user.to_string());

        sqlx::query(
            "INSERT INTO audit_events (id, event_kind, acting_user, timestamp)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&event.id)
        .bind(event.kind.to_string())
        .bind(&event.acting_user)
        .bind(&event.timestamp)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Audit event recorded: {} by {}", kind, acting_user);
        Ok(())
    }
}

impl Database {
    /// Most recent audit events first.
    pub async fn list_recent_events(&self, limit: i64) -> DomainResult<Vec<AuditEvent>> {
        let rows = sqlx::query(
            "SELECT id, event_kind, acting_user, timestamp
             FROM audit_events
             ORDER BY rowid DESC
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let mut events = Vec::new();
        for row in rows {
            let kind_str: String = row.try_get("event_kind")?;
            let kind = match kind_str.parse::<EventKind>() {
                Ok(kind) => kind,
                Err(_) => continue,
            };

            events.push(AuditEvent {
                id: row.try_get("id")?,
                kind,
                acting_user: row.try_get("acting_user")?,
                timestamp: row.try_get("timestamp")?,
            });
        }

        Ok(events)
    }
}
