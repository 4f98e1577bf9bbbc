use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Observability events the assignment engine emits. The sink implementation
/// is owned by the surrounding system; the core only names the kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    AssignmentsViewed,
    AssignmentCreated,
    AssignmentPermissionsUpdated,
    UserCreated,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::AssignmentsViewed => write!(f, "assignments_viewed"),
            EventKind::AssignmentCreated => write!(f, "assignment_created"),
            EventKind::AssignmentPermissionsUpdated => {
                write!(f, "assignment_permissions_updated")
            }
            EventKind::UserCreated => write!(f, "user_created"),
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assignments_viewed" => Ok(EventKind::AssignmentsViewed),
            "assignment_created" => Ok(EventKind::AssignmentCreated),
            "assignment_permissions_updated" => Ok(EventKind::AssignmentPermissionsUpdated),
            "user_created" => Ok(EventKind::UserCreated),
            _ => Err(format!("Invalid event kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: String,
    pub kind: EventKind,
    pub acting_user: String,
    pub timestamp: String,
}

impl AuditEvent {
    pub fn new(kind: EventKind, acting_user: String) -> Self {
        let now = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap();

        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            acting_user,
            timestamp: now,
        }
    }
}
