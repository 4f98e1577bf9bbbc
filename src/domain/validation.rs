//! Role rules for advocate assignments, shared by record construction and the
//! service layer so the two can never drift apart.
//!
//! Checks are evaluated independently per argument: an operation taking a
//! (patient, advocate) pair fails on whichever argument is wrong, in that
//! order.

use crate::domain::errors::{DomainError, DomainResult};
use crate::models::user::{Role, User};

/// The patient side of an assignment (or lookup) must hold the patient role.
pub fn require_patient(user: &User) -> DomainResult<()> {
    if !user.has_role(Role::Patient) {
        return Err(DomainError::InvalidRole(format!(
            "User {} must have the patient role",
            user.username
        )));
    }
    Ok(())
}

/// The advocate side of an assignment (or lookup) must hold the advocate role.
pub fn require_advocate(user: &User) -> DomainResult<()> {
    if !user.has_role(Role::Advocate) {
        return Err(DomainError::InvalidRole(format!(
            "User {} must have the patient advocate role",
            user.username
        )));
    }
    Ok(())
}

/// An advocate entering a new assignment cannot also be an HCP.
pub fn require_eligible_advocate(user: &User) -> DomainResult<()> {
    if user.has_role(Role::Hcp) {
        return Err(DomainError::RoleConflict(format!(
            "A patient advocate cannot be an HCP: {}",
            user.username
        )));
    }
    Ok(())
}

/// A user cannot be assigned as their own advocate. Unreachable when role
/// sets are disjoint; reachable for a user holding both roles.
pub fn require_distinct_pair(patient: &User, advocate: &User) -> DomainResult<()> {
    if patient.username == advocate.username {
        return Err(DomainError::RoleConflict(format!(
            "User {} cannot be assigned as their own advocate",
            patient.username
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, roles: Vec<Role>) -> User {
        User::new(username.to_string(), roles)
    }

    #[test]
    fn test_patient_role_required() {
        let patient = user("pat", vec![Role::Patient]);
        let advocate = user("adv", vec![Role::Advocate]);

        assert!(require_patient(&patient).is_ok());
        assert!(matches!(
            require_patient(&advocate),
            Err(DomainError::InvalidRole(_))
        ));
    }

    #[test]
    fn test_advocate_role_required() {
        let patient = user("pat", vec![Role::Patient]);
        let advocate = user("adv", vec![Role::Advocate]);

        assert!(require_advocate(&advocate).is_ok());
        assert!(matches!(
            require_advocate(&patient),
            Err(DomainError::InvalidRole(_))
        ));
    }

    #[test]
    fn test_hcp_is_not_an_eligible_advocate() {
        let advocate = user("adv", vec![Role::Advocate]);
        let conflicted = user("adv2", vec![Role::Advocate, Role::Hcp]);

        assert!(require_eligible_advocate(&advocate).is_ok());
        assert!(matches!(
            require_eligible_advocate(&conflicted),
            Err(DomainError::RoleConflict(_))
        ));
    }

    #[test]
    fn test_self_pairing_rejected() {
        let both = user("dual", vec![Role::Patient, Role::Advocate]);
        let advocate = user("adv", vec![Role::Advocate]);

        assert!(require_distinct_pair(&both, &advocate).is_ok());
        assert!(matches!(
            require_distinct_pair(&both, &both),
            Err(DomainError::RoleConflict(_))
        ));
    }
}
