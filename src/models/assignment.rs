use std::hash::{Hash, Hasher};

use serde::Serialize;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::validation;
use crate::models::user::User;

/// One authorization link between a patient and a patient advocate, plus the
/// three data categories the advocate may view on the patient's behalf.
///
/// Role invariants are enforced at construction: the patient must hold the
/// patient role, the advocate must hold the advocate role and must not also
/// be an HCP. Grants are only changed through the named setters; identity is
/// the (patient username, advocate username) pair, never the grant state.
#[derive(Debug, Clone, Serialize)]
pub struct AdvocateAssignment {
    id: String,
    patient: User,
    advocate: User,
    office_visit_permission: bool,
    billing_permission: bool,
    prescription_permission: bool,
}

impl AdvocateAssignment {
    /// Builds an assignment with no grants.
    pub fn new(patient: User, advocate: User) -> DomainResult<Self> {
        Self::with_permissions(patient, advocate, false, false, false)
    }

    /// Builds an assignment with explicit grants.
    pub fn with_permissions(
        patient: User,
        advocate: User,
        office_visit: bool,
        billing: bool,
        prescription: bool,
    ) -> DomainResult<Self> {
        validation::require_patient(&patient)?;
        validation::require_advocate(&advocate)?;
        validation::require_eligible_advocate(&advocate)?;
        validation::require_distinct_pair(&patient, &advocate)?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            patient,
            advocate,
            office_visit_permission: office_visit,
            billing_permission: billing,
            prescription_permission: prescription,
        })
    }

    /// Rebuilds a record from storage. Role checks ran when the record was
    /// created; roles may legitimately have changed since.
    pub(crate) fn hydrate(
        id: String,
        patient: User,
        advocate: User,
        office_visit: bool,
        billing: bool,
        prescription: bool,
    ) -> Self {
        Self {
            id,
            patient,
            advocate,
            office_visit_permission: office_visit,
            billing_permission: billing,
            prescription_permission: prescription,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn patient(&self) -> &User {
        &self.patient
    }

    pub fn advocate(&self) -> &User {
        &self.advocate
    }

    pub fn office_visit_permission(&self) -> bool {
        self.office_visit_permission
    }

    pub fn set_office_visit_permission(&mut self, permission: bool) {
        self.office_visit_permission = permission;
    }

    pub fn billing_permission(&self) -> bool {
        self.billing_permission
    }

    pub fn set_billing_permission(&mut self, permission: bool) {
        self.billing_permission = permission;
    }

    pub fn prescription_permission(&self) -> bool {
        self.prescription_permission
    }

    pub fn set_prescription_permission(&mut self, permission: bool) {
        self.prescription_permission = permission;
    }
}

impl std::fmt::Display for AdvocateAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.advocate.username, self.patient.username)
    }
}

// Identity is the username pair only. Two records linking the same pair are
// domain-equal regardless of surrogate id or grant state.
impl PartialEq for AdvocateAssignment {
    fn eq(&self, other: &Self) -> bool {
        self.patient.username == other.patient.username
            && self.advocate.username == other.advocate.username
    }
}

impl Eq for AdvocateAssignment {}

impl Hash for AdvocateAssignment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.patient.username.hash(state);
        self.advocate.username.hash(state);
    }
}

// DTOs for API requests
#[derive(Debug, serde::Deserialize)]
pub struct CreateAssignmentRequest {
    pub patient_username: String,
    pub advocate_username: String,
}
