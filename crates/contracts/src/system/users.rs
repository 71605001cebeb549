use crate::domain::common::AggregateRoot;
use crate::shared::validation::{FieldErrors, Validate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_LOGIN_LEN: usize = 4;
pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub user_id: String,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub role_id: i32,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub last_visit_date: Option<String>,
    #[serde(default)]
    pub inactive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub user_id: String,
    pub password: String,
    pub real_name: String,
    pub phone: String,
    pub email: String,
    pub role_id: i32,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub id: Uuid,
    pub real_name: String,
    pub phone: String,
    pub email: String,
    pub role_id: i32,
    pub language: String,
    /// Empty keeps the current password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub inactive: bool,
}

impl From<&User> for UpdateUserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            real_name: user.real_name.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            role_id: user.role_id,
            language: user.language.clone(),
            password: None,
            inactive: user.inactive,
        }
    }
}

/// Roles known to the backend.
pub const ROLES: [(i32, &str); 4] = [
    (1, "Inquiries"),
    (2, "System Administrator"),
    (3, "Salesman"),
    (4, "Accountant"),
];

pub fn role_name(role_id: i32) -> &'static str {
    ROLES
        .iter()
        .find(|(id, _)| *id == role_id)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown")
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    errors.check(
        password.chars().count() >= MIN_PASSWORD_LEN,
        "password",
        "Password must be at least 4 characters",
    );
}

impl Validate for CreateUserDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("user_id", &self.user_id, "User login is required");
        errors.check(
            self.user_id.trim().chars().count() >= MIN_LOGIN_LEN,
            "user_id",
            "User login must be at least 4 characters",
        );
        errors.require("password", &self.password, "Password is required");
        check_password(&mut errors, &self.password);
        errors.email("email", &self.email);
        errors.phone("phone", &self.phone);
        errors.check(self.role_id > 0, "role_id", "Access role is required");
        errors.into_result()
    }
}

impl Validate for UpdateUserDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(password) = self.password.as_deref() {
            check_password(&mut errors, password);
        }
        errors.email("email", &self.email);
        errors.phone("phone", &self.phone);
        errors.check(self.role_id > 0, "role_id", "Access role is required");
        errors.into_result()
    }
}

impl AggregateRoot for User {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }

    fn display_name(&self) -> String {
        if self.real_name.trim().is_empty() {
            self.user_id.clone()
        } else {
            self.real_name.clone()
        }
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }

    fn aggregate_index() -> &'static str {
        "sys"
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn api_path() -> &'static str {
        "/api/users"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rules() {
        let errors = CreateUserDto::default().validate().unwrap_err();
        assert_eq!(errors.get("user_id"), Some("User login is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.get("role_id"), Some("Access role is required"));

        let dto = CreateUserDto {
            user_id: "ann".into(),
            password: "abc".into(),
            role_id: 2,
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("user_id"), Some("User login must be at least 4 characters"));
        assert_eq!(errors.get("password"), Some("Password must be at least 4 characters"));
    }

    #[test]
    fn test_update_keeps_password_optional() {
        let user = User {
            id: Uuid::new_v4(),
            user_id: "admin".into(),
            real_name: String::new(),
            phone: String::new(),
            email: "admin@example.com".into(),
            role_id: 2,
            language: "en_US".into(),
            last_visit_date: None,
            inactive: false,
        };
        let dto = UpdateUserDto::from(&user);
        assert!(dto.validate().is_ok());
        assert!(serde_json::to_value(&dto).unwrap().get("password").is_none());
        assert_eq!(user.display_name(), "admin");
        assert_eq!(role_name(user.role_id), "System Administrator");
    }
}
