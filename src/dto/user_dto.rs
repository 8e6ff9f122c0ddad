use serde::{Deserialize, Serialize};
use bson::Document;
use serde_json::{Map, Value};
use validator::Validate;

use crate::dto::without_keys;
use crate::model::user::User;

/// Role and status given to self-registered users.
pub const DEFAULT_ROLE: &str = "user";
pub const DEFAULT_STATUS: &str = "active";

/// Body of `POST /jwt`: an email plus any extra claims.
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(email)]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Body of `POST /user`. Role and status are not accepted here; they change
/// only through the admin endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub blood: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        User {
            id: None,
            email: req.email,
            name: req.name,
            image: req.image,
            blood: req.blood,
            district: req.district,
            upazila: req.upazila,
            role: Some(DEFAULT_ROLE.to_string()),
            status: Some(DEFAULT_STATUS.to_string()),
            extra: without_keys(req.extra, &["_id", "role", "status"]),
        }
    }
}

/// Self-service profile update (`PATCH /user/{id}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upazila: Option<String>,
}

/// Admin-only role/status change (`PATCH /updateUser/{id}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::to_set_document;

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let req = UpdateProfileRequest {
            blood: Some("O+".to_string()),
            district: Some("Dhaka".to_string()),
            ..Default::default()
        };
        let doc = to_set_document(&req).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get_str("blood").unwrap(), "O+");
        assert!(!doc.contains_key("name"));
    }

    #[test]
    fn test_token_request_keeps_extra_fields() {
        let req: TokenRequest = serde_json::from_str(r#"{"email":"a@b.com","name":"Karim"}"#).unwrap();
        assert_eq!(req.email, "a@b.com");
        assert_eq!(req.extra.get("name"), Some(&Value::from("Karim")));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_new_user_cannot_pick_role() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"email":"a@b.com","role":"Admin"}"#).unwrap();
        let user = User::from(req);
        assert!(!user.is_admin());
        assert_eq!(user.role.as_deref(), Some(DEFAULT_ROLE));
        assert!(!user.extra.contains_key("role"));
    }
}
