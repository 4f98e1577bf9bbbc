/// Unit tests for the AdvocateAssignment record: construction invariants,
/// grant defaults, and pair-based identity. No database involved.
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use carelink::domain::errors::DomainError;
use carelink::models::assignment::AdvocateAssignment;
use carelink::models::user::{Role, User};

fn patient(username: &str) -> User {
    User::new(username.to_string(), vec![Role::Patient])
}

fn advocate(username: &str) -> User {
    User::new(username.to_string(), vec![Role::Advocate])
}

fn hash_of(assignment: &AdvocateAssignment) -> u64 {
    let mut hasher = DefaultHasher::new();
    assignment.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_construction_defaults_to_no_permissions() {
    let assignment = AdvocateAssignment::new(patient("pat1"), advocate("adv1"))
        .expect("valid pair should construct");

    assert!(!assignment.office_visit_permission());
    assert!(!assignment.billing_permission());
    assert!(!assignment.prescription_permission());
    assert_eq!(assignment.patient().username, "pat1");
    assert_eq!(assignment.advocate().username, "adv1");
    assert!(!assignment.id().is_empty());
}

#[test]
fn test_construction_with_explicit_permissions() {
    let assignment = AdvocateAssignment::with_permissions(
        patient("pat1"),
        advocate("adv1"),
        true,
        false,
        true,
    )
    .expect("valid pair should construct");

    assert!(assignment.office_visit_permission());
    assert!(!assignment.billing_permission());
    assert!(assignment.prescription_permission());
}

#[test]
fn test_patient_must_hold_patient_role() {
    // An advocate on the patient side fails the patient role check
    let result = AdvocateAssignment::new(advocate("adv1"), advocate("adv2"));
    assert!(matches!(result, Err(DomainError::InvalidRole(_))));
}

#[test]
fn test_advocate_must_hold_advocate_role() {
    // Two patients must fail on the advocate check, not slip through
    let result = AdvocateAssignment::new(patient("pat1"), patient("pat2"));
    assert!(matches!(result, Err(DomainError::InvalidRole(_))));
}

#[test]
fn test_advocate_holding_hcp_is_rejected() {
    let conflicted = User::new("adv1".to_string(), vec![Role::Advocate, Role::Hcp]);
    let result = AdvocateAssignment::new(patient("pat1"), conflicted);
    assert!(matches!(result, Err(DomainError::RoleConflict(_))));
}

#[test]
fn test_user_cannot_be_their_own_advocate() {
    let dual = User::new("dual".to_string(), vec![Role::Patient, Role::Advocate]);
    let result = AdvocateAssignment::new(dual.clone(), dual);
    assert!(matches!(result, Err(DomainError::RoleConflict(_))));
}

#[test]
fn test_permission_setters() {
    let mut assignment =
        AdvocateAssignment::new(patient("pat1"), advocate("adv1")).expect("valid pair");

    assignment.set_office_visit_permission(true);
    assignment.set_billing_permission(true);
    assignment.set_prescription_permission(true);

    assert!(assignment.office_visit_permission());
    assert!(assignment.billing_permission());
    assert!(assignment.prescription_permission());
}

#[test]
fn test_equality_is_the_username_pair_only() {
    let a = AdvocateAssignment::new(patient("pat1"), advocate("adv1")).expect("valid pair");
    let b = AdvocateAssignment::with_permissions(
        patient("pat1"),
        advocate("adv1"),
        true,
        true,
        true,
    )
    .expect("valid pair");

    // Different ids, different grants, same pair: domain-equal
    assert_ne!(a.id(), b.id());
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_equality_distinguishes_pairs() {
    let a1_p1 = AdvocateAssignment::new(patient("pat1"), advocate("adv1")).expect("valid pair");
    let a1_p2 = AdvocateAssignment::new(patient("pat2"), advocate("adv1")).expect("valid pair");
    let a2_p1 = AdvocateAssignment::new(patient("pat1"), advocate("adv2")).expect("valid pair");
    let a2_p2 = AdvocateAssignment::new(patient("pat2"), advocate("adv2")).expect("valid pair");

    assert_eq!(a1_p1, a1_p1.clone());
    assert_ne!(a1_p1, a1_p2);
    assert_ne!(a1_p1, a2_p1);
    assert_ne!(a1_p1, a2_p2);
}

#[test]
fn test_display_names_advocate_then_patient() {
    let assignment =
        AdvocateAssignment::new(patient("pat1"), advocate("adv1")).expect("valid pair");
    assert_eq!(assignment.to_string(), "adv1 -> pat1");
}
