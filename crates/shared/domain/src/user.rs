//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::{first_violation, not_blank};
use crate::constants::{ROLE_ADMIN, ROLE_USUARIO};
use crate::error::{DomainError, DomainResult};

/// Recognized user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Usuario,
}

impl UserRole {
    /// Parse a stored role label. Unknown labels grant no role at all.
    pub fn from_label(label: &str) -> Option<UserRole> {
        match label {
            ROLE_ADMIN => Some(UserRole::Admin),
            ROLE_USUARIO => Some(UserRole::Usuario),
            _ => None,
        }
    }

    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Usuario => ROLE_USUARIO,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User account. Users are hard-deleted, unlike the catalog records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: i32,
    #[validate(custom(function = "not_blank", message = "The username is required."))]
    pub username: String,
    /// Hex SHA-256 digest of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// Role label as stored; see [`User::role`]
    #[validate(custom(function = "known_role", message = "The role must be admin or usuario."))]
    pub role: String,
    pub active: bool,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: 0,
            username: String::new(),
            password_hash: String::new(),
            email: None,
            full_name: None,
            role: ROLE_USUARIO.to_string(),
            active: true,
        }
    }
}

impl User {
    /// Recognized role, if any.
    pub fn role(&self) -> Option<UserRole> {
        UserRole::from_label(&self.role)
    }

    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|role| role.is_admin())
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// Run the field rules and report the first violation.
    pub fn check(&self) -> DomainResult<()> {
        self.validate()
            .map_err(|errors| DomainError::validation(first_violation(&errors, &["username", "role"])))
    }
}

fn known_role(value: &str) -> Result<(), validator::ValidationError> {
    match UserRole::from_label(value) {
        Some(_) => Ok(()),
        None => Err(validator::ValidationError::new("role")),
    }
}
