/// Integration tests for the audit hook: which operations emit events and
/// how they are tagged with the acting principal.
mod helpers;

use std::sync::Arc;

use carelink::models::audit::EventKind;
use carelink::services::AssignmentService;
use helpers::*;

#[tokio::test]
async fn test_create_emits_a_tagged_event() {
    let db = Arc::new(setup_test_db().await);
    let service = AssignmentService::new(db.clone(), db.clone());

    let patient = create_patient(&db, "pat1").await;
    let advocate = create_advocate(&db, "adv1").await;

    service
        .create(patient, advocate, "admin")
        .await
        .expect("create");

    let events = db.list_recent_events(10).await.expect("events");
    assert_eq!(1, events.len());
    assert_eq!(EventKind::AssignmentCreated, events[0].kind);
    assert_eq!("admin", events[0].acting_user);
}

#[tokio::test]
async fn test_multi_record_reads_emit_view_events() {
    let db = Arc::new(setup_test_db().await);
    let service = AssignmentService::new(db.clone(), db.clone());

    let patient = create_patient(&db, "pat1").await;
    let advocate = create_advocate(&db, "adv1").await;

    service
        .create(patient.clone(), advocate.clone(), "admin")
        .await
        .expect("create");

    service.find_all("alice").await.expect("find all");
    service
        .find_by_patient(&patient, "alice")
        .await
        .expect("by patient");
    service
        .find_by_advocate(&advocate, "alice")
        .await
        .expect("by advocate");

    // A single-record pair lookup is not a view event
    service
        .find_pair(&patient, &advocate)
        .await
        .expect("pair lookup");

    let events = db.list_recent_events(10).await.expect("events");
    let views: Vec<_> = events
        .iter()
        .filter(|e| e.kind == EventKind::AssignmentsViewed)
        .collect();
    assert_eq!(3, views.len());
    assert!(views.iter().all(|e| e.acting_user == "alice"));
    assert_eq!(4, events.len());
}

#[tokio::test]
async fn test_permission_update_emits_an_event() {
    let db = Arc::new(setup_test_db().await);
    let service = AssignmentService::new(db.clone(), db.clone());

    let patient = create_patient(&db, "pat1").await;
    let advocate = create_advocate(&db, "adv1").await;

    let assignment = service
        .create(patient, advocate, "admin")
        .await
        .expect("create");
    service
        .set_permissions(&assignment, &[true, true, false], "pat1")
        .await
        .expect("update");

    let events = db.list_recent_events(10).await.expect("events");
    // Most recent first
    assert_eq!(EventKind::AssignmentPermissionsUpdated, events[0].kind);
    assert_eq!("pat1", events[0].acting_user);
}

#[tokio::test]
async fn test_failed_operations_emit_nothing() {
    let db = Arc::new(setup_test_db().await);
    let service = AssignmentService::new(db.clone(), db.clone());

    let patient = create_patient(&db, "pat1").await;
    let advocate = create_advocate(&db, "adv1").await;

    // Role violation on lookup
    let _ = service.find_by_patient(&advocate, "admin").await;
    // Role violation on create
    let _ = service.create(advocate.clone(), patient.clone(), "admin").await;

    let events = db.list_recent_events(10).await.expect("events");
    assert!(events.is_empty());
}
