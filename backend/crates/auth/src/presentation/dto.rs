//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// POST /users body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub display_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .require_non_blank("displayId", &self.display_id)
            .require_non_blank("name", &self.name)
            .check_email("email", &self.email)
            .require_non_blank("password", &self.password);
        errors.into_result()
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /login body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_email("email", &self.email);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

/// User summary returned with the token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: String,
    pub name: String,
    pub display_id: String,
    pub email: String,
}

impl From<&User> for LoginUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            display_id: user.display_id.clone(),
            email: user.email.to_string(),
        }
    }
}

// ============================================================================
// User
// ============================================================================

/// Public user row (no password hash)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub display_id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            display_id: user.display_id.clone(),
            name: user.name.clone(),
            email: user.email.to_string(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            display_id: "frank".to_string(),
            name: "Frank".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_validation() {
        assert!(register("frank@example.com", "pw").validate().is_ok());

        let errors = register("frank", " ").validate().unwrap_err();
        let fields: Vec<&str> = errors.issues().iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[test]
    fn test_register_request_is_camel_case() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"displayId":"g","name":"G","email":"g@example.com","password":"x"}"#,
        )
        .unwrap();
        assert_eq!(req.display_id, "g");
    }

    #[test]
    fn test_login_allows_any_password_string() {
        let req = LoginRequest {
            email: "a@example.com".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_ok());
    }
}
