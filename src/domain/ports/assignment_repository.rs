use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::models::assignment::AdvocateAssignment;
use crate::models::user::User;

/// Keyed storage for advocate assignments. Records are keyed by surrogate id;
/// the patient/advocate lookups return records in insertion order. Nothing
/// here enforces uniqueness of the (patient, advocate) pair — the store
/// accepts domain-equal duplicates.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Inserts the record, or overwrites the grant columns when the id
    /// already exists. The overwrite is a single statement so a permission
    /// rewrite is atomic.
    async fn save(&self, assignment: &AdvocateAssignment) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<AdvocateAssignment>>;

    async fn find_all(&self) -> DomainResult<Vec<AdvocateAssignment>>;

    async fn find_by_patient(&self, patient: &User) -> DomainResult<Vec<AdvocateAssignment>>;

    async fn find_by_advocate(&self, advocate: &User) -> DomainResult<Vec<AdvocateAssignment>>;

    async fn find_by_patient_and_advocate(
        &self,
        patient: &User,
        advocate: &User,
    ) -> DomainResult<Option<AdvocateAssignment>>;

    async fn count(&self) -> DomainResult<i64>;

    async fn delete_all(&self) -> DomainResult<()>;
}
