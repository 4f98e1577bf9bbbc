use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::models::audit::EventKind;

/// Observability sink for assignment activity. The engine calls this hook on
/// every create, permission update and multi-record read; the implementation
/// belongs to the surrounding system.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record_event(&self, kind: EventKind, acting_user: &str) -> DomainResult<()>;
}
