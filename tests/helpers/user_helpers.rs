use carelink::database::Database;
use carelink::domain::ports::user_directory::UserDirectory;
use carelink::models::user::{Role, User};

pub async fn create_user_with_roles(db: &Database, username: &str, roles: Vec<Role>) -> User {
    let user = User::new(username.to_string(), roles);
    db.save_user(&user).await.expect("Failed to save user");
    user
}

pub async fn create_patient(db: &Database, username: &str) -> User {
    create_user_with_roles(db, username, vec![Role::Patient]).await
}

pub async fn create_advocate(db: &Database, username: &str) -> User {
    create_user_with_roles(db, username, vec![Role::Advocate]).await
}
