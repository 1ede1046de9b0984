//! Access Token Claims
//!
//! Payload of the bearer token issued at login.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use kernel::identity::AuthenticatedUser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::entity::user::User;

/// JWT claims: `{sub, name, displayId, iat, exp}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessClaims {
    /// User ID
    pub sub: String,
    pub name: String,
    pub display_id: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl AccessClaims {
    pub fn for_user(user: &User, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: user.id.to_string(),
            name: user.name.clone(),
            display_id: user.display_id.clone(),
            iat,
            exp: iat.saturating_add(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)),
        }
    }

    /// Convert verified claims into the request identity
    pub fn into_identity(self) -> Result<AuthenticatedUser, uuid::Error> {
        let user_id: UserId = self.sub.parse()?;
        Ok(AuthenticatedUser {
            user_id,
            name: self.name,
            display_id: self.display_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, user_password::UserPassword};
    use platform::password::legacy_sha256_hex;

    fn user() -> User {
        User::new(
            "alice01".to_string(),
            "Alice".to_string(),
            Email::new("alice@example.com").unwrap(),
            UserPassword::from_db(legacy_sha256_hex("pw")).unwrap(),
        )
    }

    #[test]
    fn test_claims_for_user() {
        let user = user();
        let now = Utc::now();
        let claims = AccessClaims::for_user(&user, now, Duration::from_secs(24 * 3600));

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.exp - claims.iat, 86_400);

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["displayId"], "alice01");
        assert_eq!(json["name"], "Alice");
    }

    #[test]
    fn test_into_identity() {
        let user = user();
        let claims = AccessClaims::for_user(&user, Utc::now(), Duration::from_secs(60));
        let identity = claims.into_identity().unwrap();
        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.display_id, "alice01");
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let claims = AccessClaims {
            sub: "42".to_string(),
            name: "x".to_string(),
            display_id: "x".to_string(),
            iat: 0,
            exp: 1,
        };
        assert!(claims.into_identity().is_err());
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let claims = AccessClaims::for_user(&user(), Utc::now(), Duration::from_secs(u64::MAX));
        assert_eq!(claims.exp, i64::MAX);
    }
}
