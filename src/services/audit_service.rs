use std::sync::Arc;

use crate::database::Database;
use crate::domain::errors::DomainResult;
use crate::models::audit::AuditEvent;

/// Read side of the audit trail, for the admin event listing. Writes go
/// through the `AuditSink` port.
#[derive(Clone)]
pub struct AuditService {
    db: Arc<Database>,
}

impl AuditService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn recent_events(&self, limit: i64) -> DomainResult<Vec<AuditEvent>> {
        self.db.list_recent_events(limit).await
    }
}
