use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roles a user may hold. Role sets are dynamic: a user can carry any
/// combination, and the assignment engine only ever inspects Patient,
/// Advocate and Hcp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Advocate,
    Hcp,
    Admin,
    Pharmacist,
    LabTech,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Advocate => write!(f, "advocate"),
            Role::Hcp => write!(f, "hcp"),
            Role::Admin => write!(f, "admin"),
            Role::Pharmacist => write!(f, "pharmacist"),
            Role::LabTech => write!(f, "lab_tech"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "patient" => Ok(Role::Patient),
            "advocate" => Ok(Role::Advocate),
            "hcp" => Ok(Role::Hcp),
            "admin" => Ok(Role::Admin),
            "pharmacist" => Ok(Role::Pharmacist),
            "lab_tech" => Ok(Role::LabTech),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// A user known to the identity directory. The assignment engine reads the
/// role set and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub roles: Vec<Role>,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    pub fn new(username: String, roles: Vec<Role>) -> Self {
        let now = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap();

        Self {
            id: Uuid::new_v4().to_string(),
            username: username.to_lowercase(),
            roles,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// The one role-membership predicate every layer shares.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

// DTOs for API requests/responses
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub roles: Vec<Role>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            roles: user.roles,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
