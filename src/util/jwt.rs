use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};
use uuid::Uuid;
use crate::config::JwtConfig;

/// Claim names managed by the issuer; callers cannot override them.
const RESERVED_CLAIMS: [&str; 5] = ["email", "iat", "exp", "jti", "iss"];

/// JWT token claims structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Email the token was issued for; the admin check looks the user up by it
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// JWT ID
    pub jti: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Any other fields the client put in the token request
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Error types for JWT operations
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum JwtError {
    #[error("Failed to encode JWT token: {0}")]
    EncodingFailed(String),
    #[error("Missing authorization header")]
    MissingHeader,
    #[error("Authorization header is not a bearer credential")]
    MalformedHeader,
    #[error("Missing bearer token")]
    MissingToken,
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

pub trait JwtTokenUtils {
    /// Signs a token for `email` carrying `extra` as additional claims.
    fn generate_token(&self, email: &str, extra: Map<String, Value>) -> Result<String, JwtError>;
    fn validate_token(&self, token: &str) -> Result<Claims, JwtError>;
    /// Pulls the token out of an `Authorization: Bearer <token>` header value.
    fn extract_token_from_header(&self, auth_header: Option<&str>) -> Result<String, JwtError>;
}

#[derive(Debug, Clone)]
pub struct JwtTokenUtilsImpl {
    pub jwt_config: JwtConfig,
}

impl JwtTokenUtilsImpl {
    pub fn new(jwt_config: JwtConfig) -> Self {
        JwtTokenUtilsImpl { jwt_config }
    }

    /// Signs a token that expires `expires_in` from now.
    pub fn generate_token_with_expiry(
        &self,
        email: &str,
        mut extra: Map<String, Value>,
        expires_in: Duration,
    ) -> Result<String, JwtError> {
        debug!("Generating token for: {}", email);

        for key in RESERVED_CLAIMS {
            if extra.remove(key).is_some() {
                warn!("Ignoring reserved claim '{}' in token payload", key);
            }
        }

        let now = Utc::now();
        let claims = Claims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
            jti: Uuid::new_v4().to_string(),
            iss: self.jwt_config.jwt_issuer.clone(),
            extra,
        };

        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(self.jwt_config.jwt_secret.as_bytes());

        match encode(&header, &claims, &encoding_key) {
            Ok(token) => {
                info!("Successfully generated token for: {}", email);
                Ok(token)
            }
            Err(err) => {
                error!("Failed to encode JWT token: {}", err);
                Err(JwtError::EncodingFailed(err.to_string()))
            }
        }
    }
}

impl JwtTokenUtils for JwtTokenUtilsImpl {
    fn generate_token(&self, email: &str, extra: Map<String, Value>) -> Result<String, JwtError> {
        let lifetime = Duration::minutes(self.jwt_config.token_expiration);
        self.generate_token_with_expiry(email, extra, lifetime)
    }

    fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        debug!("Validating JWT token");

        let decoding_key = DecodingKey::from_secret(self.jwt_config.jwt_secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        if let Some(ref issuer) = self.jwt_config.jwt_issuer {
            validation.set_issuer(&[issuer]);
        }

        match decode::<Claims>(token, &decoding_key, &validation) {
            Ok(token_data) => {
                let claims = token_data.claims;
                if claims.exp < Utc::now().timestamp() {
                    warn!("Token has expired for: {}", claims.email);
                    return Err(JwtError::TokenExpired);
                }
                debug!("Token validation successful for: {}", claims.email);
                Ok(claims)
            }
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => {
                    warn!("Token has expired");
                    Err(JwtError::TokenExpired)
                }
                _ => {
                    warn!("Failed to decode JWT token: {}", err);
                    Err(JwtError::InvalidToken(err.to_string()))
                }
            },
        }
    }

    fn extract_token_from_header(&self, auth_header: Option<&str>) -> Result<String, JwtError> {
        let auth_header = auth_header.ok_or(JwtError::MissingHeader)?;

        let mut parts = auth_header.trim().splitn(2, ' ');
        let scheme = parts.next().unwrap_or_default();
        if !scheme.eq_ignore_ascii_case("Bearer") {
            debug!("Authorization header does not use the Bearer scheme");
            return Err(JwtError::MalformedHeader);
        }

        let token = parts.next().map(str::trim).unwrap_or_default();
        if token.is_empty() {
            debug!("Bearer scheme without a token");
            return Err(JwtError::MissingToken);
        }

        Ok(token.to_string())
    }
}
