use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::assignment_repository::AssignmentRepository;
use crate::domain::ports::audit_sink::AuditSink;
use crate::domain::validation;
use crate::models::assignment::AdvocateAssignment;
use crate::models::audit::EventKind;
use crate::models::user::User;

/// Orchestrates advocate assignments: role validation, storage, and the
/// audit hook. Arguments arrive as already-resolved users; mapping a
/// username to a user (and reporting "user not found") is the caller's job.
///
/// Repeated `create` calls for the same pair are not deduplicated: each call
/// persists a new record with its own id, and the two compare domain-equal.
#[derive(Clone)]
pub struct AssignmentService {
    repository: Arc<dyn AssignmentRepository>,
    audit: Arc<dyn AuditSink>,
}

impl AssignmentService {
    pub fn new(repository: Arc<dyn AssignmentRepository>, audit: Arc<dyn AuditSink>) -> Self {
        Self { repository, audit }
    }

    /// All assignments, unordered, empty when none exist.
    pub async fn find_all(&self, acting_user: &str) -> DomainResult<Vec<AdvocateAssignment>> {
        let assignments = self.repository.find_all().await?;
        self.record(EventKind::AssignmentsViewed, acting_user).await;
        Ok(assignments)
    }

    /// Assignments for a patient, in creation order. A patient with no
    /// links gets an empty list, not an error.
    pub async fn find_by_patient(
        &self,
        patient: &User,
        acting_user: &str,
    ) -> DomainResult<Vec<AdvocateAssignment>> {
        validation::require_patient(patient)?;
        let assignments = self.repository.find_by_patient(patient).await?;
        self.record(EventKind::AssignmentsViewed, acting_user).await;
        Ok(assignments)
    }

    /// Assignments for an advocate, in creation order.
    pub async fn find_by_advocate(
        &self,
        advocate: &User,
        acting_user: &str,
    ) -> DomainResult<Vec<AdvocateAssignment>> {
        validation::require_advocate(advocate)?;
        let assignments = self.repository.find_by_advocate(advocate).await?;
        self.record(EventKind::AssignmentsViewed, acting_user).await;
        Ok(assignments)
    }

    /// The assignment linking a specific pair, if one exists. Role checks
    /// still apply; an absent link is `None`, not an error.
    pub async fn find_pair(
        &self,
        patient: &User,
        advocate: &User,
    ) -> DomainResult<Option<AdvocateAssignment>> {
        validation::require_patient(patient)?;
        validation::require_advocate(advocate)?;
        self.repository
            .find_by_patient_and_advocate(patient, advocate)
            .await
    }

    /// Creates and persists an assignment with no grants.
    pub async fn create(
        &self,
        patient: User,
        advocate: User,
        acting_user: &str,
    ) -> DomainResult<AdvocateAssignment> {
        let assignment = AdvocateAssignment::new(patient, advocate)?;
        self.repository.save(&assignment).await?;
        self.record(EventKind::AssignmentCreated, acting_user).await;
        Ok(assignment)
    }

    /// Creates and persists an assignment with explicit grants.
    pub async fn create_with_permissions(
        &self,
        patient: User,
        advocate: User,
        office_visit: bool,
        billing: bool,
        prescription: bool,
        acting_user: &str,
    ) -> DomainResult<AdvocateAssignment> {
        let assignment = AdvocateAssignment::with_permissions(
            patient,
            advocate,
            office_visit,
            billing,
            prescription,
        )?;
        self.repository.save(&assignment).await?;
        self.record(EventKind::AssignmentCreated, acting_user).await;
        Ok(assignment)
    }

    /// Overwrites all three grants of an existing assignment from an ordered
    /// triple `[office_visit, billing, prescription]`. Any other length is
    /// rejected before anything is written, and the persisted write covers
    /// the three grants in one statement.
    pub async fn set_permissions(
        &self,
        assignment: &AdvocateAssignment,
        permissions: &[bool],
        acting_user: &str,
    ) -> DomainResult<AdvocateAssignment> {
        if permissions.len() != 3 {
            return Err(DomainError::MalformedInput(format!(
                "Expected exactly 3 permission values, got {}",
                permissions.len()
            )));
        }

        let mut updated = assignment.clone();
        updated.set_office_visit_permission(permissions[0]);
        updated.set_billing_permission(permissions[1]);
        updated.set_prescription_permission(permissions[2]);

        self.repository.save(&updated).await?;
        self.record(EventKind::AssignmentPermissionsUpdated, acting_user)
            .await;
        Ok(updated)
    }

    pub async fn count(&self) -> DomainResult<i64> {
        self.repository.count().await
    }

    pub async fn delete_all(&self) -> DomainResult<()> {
        self.repository.delete_all().await
    }

    // The sink belongs to the surrounding system; a sink failure must not
    // abort an otherwise completed operation.
    async fn record(&self, kind: EventKind, acting_user: &str) {
        if let Err(e) = self.audit.record_event(kind, acting_user).await {
            tracing::warn!("Failed to record audit event {}: {}", kind, e);
        }
    }
}
