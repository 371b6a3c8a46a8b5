//! User domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Represents a registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing)] // Never serialize credentials to API responses
    pub passhash: String,
    #[serde(skip_serializing)]
    pub salt: String,
    pub email: String,
    pub status: bool,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub zip_code: String,
    pub state_abbr: String,
    pub city_name: String,
    pub city_number: Option<i32>,
    pub area: String,
    pub flag_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Registration request. The password is hashed before anything is persisted;
/// if a flag identifier is given it must reference an existing flag.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    #[validate(custom(function = "shared::validation::validate_zip_code"))]
    pub zip_code: String,
    #[validate(custom(function = "shared::validation::validate_state_abbr"))]
    pub state_abbr: String,
    #[validate(length(min = 1, message = "City name is required"))]
    pub city_name: String,
    pub city_number: Option<i32>,
    #[validate(length(min = 1, message = "Area is required"))]
    pub area: String,
    pub flag: Option<String>,
}

/// User wire representation. Credentials never leave the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: bool,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub zip_code: String,
    pub state_abbr: String,
    pub city_name: String,
    pub city_number: Option<i32>,
    pub area: String,
    pub flag_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            status: user.status,
            phone: user.phone,
            birthday: user.birthday,
            zip_code: user.zip_code,
            state_abbr: user.state_abbr,
            city_name: user.city_name,
            city_number: user.city_number,
            area: user.area,
            flag_id: user.flag_id,
            created_at: user.created_at,
            last_updated: user.last_updated,
        }
    }
}

/// Updatable user profile fields, taken from query-string parameters.
/// Credentials, id and timestamps are not updatable through this surface.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<bool>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub zip_code: Option<String>,
    pub state_abbr: Option<String>,
    pub city_name: Option<String>,
    pub city_number: Option<i32>,
    pub area: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: Name().fake(),
            passhash: "$argon2id$secret".to_string(),
            salt: "somesalt".to_string(),
            email: SafeEmail().fake(),
            status: false,
            phone: Some("+5511999990000".to_string()),
            birthday: None,
            zip_code: "01310-100".to_string(),
            state_abbr: "SP".to_string(),
            city_name: "São Paulo".to_string(),
            city_number: Some(3550308),
            area: "Bela Vista".to_string(),
            flag_id: None,
            created_at: Utc::now(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_user_credentials_not_serialized() {
        let json = serde_json::to_string(&sample_user()).unwrap();
        assert!(!json.contains("passhash"));
        assert!(!json.contains("somesalt"));
        assert!(!json.contains("$argon2id$secret"));
    }

    #[test]
    fn test_user_response_from() {
        let user = sample_user();
        let response: UserResponse = user.clone().into();
        assert_eq!(response.id, user.id);
        assert_eq!(response.email, user.email);
        assert_eq!(response.state_abbr, "SP");
    }

    #[test]
    fn test_create_request_validation() {
        let request = CreateUserRequest {
            name: Name().fake(),
            password: "secret-password".to_string(),
            email: SafeEmail().fake(),
            phone: None,
            birthday: None,
            zip_code: "01310-100".to_string(),
            state_abbr: "SP".to_string(),
            city_name: "São Paulo".to_string(),
            city_number: None,
            area: "Bela Vista".to_string(),
            flag: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_fields() {
        let request = CreateUserRequest {
            name: "Maria".to_string(),
            password: "short".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            birthday: None,
            zip_code: "123".to_string(),
            state_abbr: "sp".to_string(),
            city_name: String::new(),
            city_number: None,
            area: String::new(),
            flag: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("zip_code"));
        assert!(errors.field_errors().contains_key("state_abbr"));
    }
}
