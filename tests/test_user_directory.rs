/// Integration tests for the sqlx-backed identity directory.
mod helpers;

use carelink::domain::ports::user_directory::UserDirectory;
use carelink::models::user::{Role, User};
use helpers::*;

#[tokio::test]
async fn test_save_and_resolve_round_trips_roles() {
    let db = setup_test_db().await;

    let user = User::new(
        "carol".to_string(),
        vec![Role::Advocate, Role::Pharmacist],
    );
    db.save_user(&user).await.expect("save");

    let resolved = db
        .find_by_username("carol")
        .await
        .expect("lookup")
        .expect("user exists");
    assert_eq!(user.id, resolved.id);
    assert_eq!("carol", resolved.username);
    assert!(resolved.has_role(Role::Advocate));
    assert!(resolved.has_role(Role::Pharmacist));
    assert!(!resolved.has_role(Role::Patient));
    assert!(!resolved.has_role(Role::Hcp));
}

#[tokio::test]
async fn test_unknown_username_resolves_to_none() {
    let db = setup_test_db().await;

    let resolved = db.find_by_username("nobody").await.expect("lookup");
    assert!(resolved.is_none());
}

#[tokio::test]
async fn test_usernames_are_stored_lowercase() {
    let db = setup_test_db().await;

    let user = User::new("MixedCase".to_string(), vec![Role::Patient]);
    db.save_user(&user).await.expect("save");

    let resolved = db
        .find_by_username("mixedcase")
        .await
        .expect("lookup")
        .expect("user exists");
    assert_eq!("mixedcase", resolved.username);
}

#[tokio::test]
async fn test_list_and_count_users() {
    let db = setup_test_db().await;

    create_patient(&db, "pat1").await;
    create_advocate(&db, "adv1").await;
    create_user_with_roles(&db, "doc1", vec![Role::Hcp, Role::Admin]).await;

    assert_eq!(3, db.count().await.expect("count"));

    let users = db.list_users().await.expect("list");
    let usernames: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(vec!["adv1", "doc1", "pat1"], usernames);
}

#[tokio::test]
async fn test_delete_all_users() {
    let db = setup_test_db().await;

    create_patient(&db, "pat1").await;
    create_advocate(&db, "adv1").await;
    assert_eq!(2, db.count().await.expect("count"));

    db.delete_all().await.expect("delete all");
    assert_eq!(0, db.count().await.expect("count"));
    assert!(db.find_by_username("pat1").await.expect("lookup").is_none());
}
