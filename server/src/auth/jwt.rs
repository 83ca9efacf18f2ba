use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Tokens stay valid this long; there is no refresh flow or revocation list,
/// so a logged-out token keeps working until it expires.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Identity carried inside the bearer token and attached to requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub exp: i64,
}

pub fn issue_token(secret: &str, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp();
    let claims = Claims {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify_token(secret: &str, token: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_user() -> User {
        User {
            id: 7,
            name: "Fern".to_string(),
            email: "fern@example.com".to_string(),
            password: "irrelevant".to_string(),
            profile_picture: None,
            registration_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn token_roundtrip() {
        let token = issue_token("secret", &test_user()).unwrap();
        let claims = verify_token("secret", &token).unwrap();
        assert_eq!(claims.id, 7);
        assert_eq!(claims.name, "Fern");
        assert_eq!(claims.email, "fern@example.com");
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = issue_token("secret", &test_user()).unwrap();
        assert!(verify_token("other-secret", &token).is_none());
    }

    #[test]
    fn expired_token_rejected() {
        let claims = Claims {
            id: 7,
            name: "Fern".to_string(),
            email: "fern@example.com".to_string(),
            exp: (Utc::now() - Duration::days(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();
        assert!(verify_token("secret", &token).is_none());
    }

    #[test]
    fn garbage_token_rejected() {
        assert!(verify_token("secret", "definitely.not.a-jwt").is_none());
    }
}
