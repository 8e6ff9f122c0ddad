use chrono::{Duration, Utc};
use diagpulse_backend::config::JwtConfig;
use diagpulse_backend::util::jwt::*;
use serde_json::{Map, Value};

fn create_test_jwt_utils() -> JwtTokenUtilsImpl {
    JwtTokenUtilsImpl::new(JwtConfig::default())
}

#[test]
fn test_jwt_utils_creation() {
    let jwt_utils = create_test_jwt_utils();
    assert!(jwt_utils.jwt_config.jwt_secret.len() >= 32);
    assert_eq!(jwt_utils.jwt_config.token_expiration, 60);
}

#[test]
fn test_generate_and_validate_token() {
    let jwt_utils = create_test_jwt_utils();
    let mut extra = Map::new();
    extra.insert("name".to_string(), Value::from("Nusrat"));

    let token = jwt_utils.generate_token("nusrat@example.com", extra).unwrap();
    assert_eq!(token.split('.').count(), 3);

    let claims = jwt_utils.validate_token(&token).unwrap();
    assert_eq!(claims.email, "nusrat@example.com");
    assert_eq!(claims.extra.get("name"), Some(&Value::from("Nusrat")));
    assert_eq!(claims.iss.as_deref(), Some("diagpulse-backend"));
}

#[test]
fn test_token_lifetime_is_one_hour_by_default() {
    let jwt_utils = create_test_jwt_utils();
    let token = jwt_utils.generate_token("a@example.com", Map::new()).unwrap();
    let claims = jwt_utils.validate_token(&token).unwrap();
    assert_eq!(claims.exp - claims.iat, 3600);
    assert!(claims.iat <= Utc::now().timestamp());
}

#[test]
fn test_each_token_has_unique_id() {
    let jwt_utils = create_test_jwt_utils();
    let a = jwt_utils.validate_token(&jwt_utils.generate_token("a@example.com", Map::new()).unwrap()).unwrap();
    let b = jwt_utils.validate_token(&jwt_utils.generate_token("a@example.com", Map::new()).unwrap()).unwrap();
    assert_ne!(a.jti, b.jti);
}

#[test]
fn test_expired_token_rejected() {
    let jwt_utils = create_test_jwt_utils();
    let token = jwt_utils
        .generate_token_with_expiry("a@example.com", Map::new(), Duration::seconds(-10))
        .unwrap();
    assert_eq!(jwt_utils.validate_token(&token), Err(JwtError::TokenExpired));
}

#[test]
fn test_tampered_token_rejected() {
    let jwt_utils = create_test_jwt_utils();
    let token = jwt_utils.generate_token("a@example.com", Map::new()).unwrap();
    let mut parts: Vec<&str> = token.split('.').collect();
    let forged = format!("{}x", parts[2]);
    parts[2] = &forged;
    let tampered = parts.join(".");
    assert!(matches!(jwt_utils.validate_token(&tampered), Err(JwtError::InvalidToken(_))));
}

#[test]
fn test_token_from_other_secret_rejected() {
    let other = JwtTokenUtilsImpl::new(JwtConfig {
        jwt_secret: "another-secret-that-is-long-enough-for-hs256".to_string(),
        ..JwtConfig::default()
    });
    let token = other.generate_token("a@example.com", Map::new()).unwrap();
    assert!(matches!(create_test_jwt_utils().validate_token(&token), Err(JwtError::InvalidToken(_))));
}

#[test]
fn test_garbage_token_rejected() {
    let jwt_utils = create_test_jwt_utils();
    assert!(jwt_utils.validate_token("not-a-jwt").is_err());
    assert!(jwt_utils.validate_token("").is_err());
}
