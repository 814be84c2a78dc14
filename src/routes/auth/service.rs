use crate::database::app_user::{User, UserWithPassword};
use crate::database::user_store::UserStore;
use crate::routes::auth::error::AuthError;
use crate::routes::auth::hashing::{hash_password, verify_password};
use crate::routes::auth::interfaces::{AuthClaims, Credentials};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::PgPool;
use tracing::info;

/// Creates a new user from signup credentials.
///
/// # Errors
///
/// * `AuthError::EmailTaken` if a user with the given email already exists.
/// * `AuthError::Internal` for hashing or other database failures.
pub async fn signup_user(pool: &PgPool, payload: &Credentials) -> Result<User, AuthError> {
    let hashed = hash_password(payload.password.as_bytes())?;
    info!("Creating user email={}", payload.email);

    match UserStore::create(pool, &payload.email, &hashed).await {
        Ok(user) => Ok(user),
        Err(e) if e.is_unique_violation() => Err(AuthError::EmailTaken),
        Err(e) => Err(e.into()),
    }
}

/// Authenticates a user based on email and password.
///
/// # Errors
///
/// * `AuthError::InvalidCredentials` if the email or password is incorrect.
/// * `AuthError::Internal` for database failures.
pub async fn authenticate_user(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<UserWithPassword, AuthError> {
    let user = UserStore::find_by_email_with_password(pool, email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let valid = verify_password(password.as_bytes(), &user.password)?;
    if !valid {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}

/// Creates a signed access token for a given user ID.
///
/// # Errors
///
/// * `AuthError::Internal` if token encoding fails.
pub fn create_access_token(
    jwt_secret: &str,
    expiry_minutes: i64,
    user_id: i32,
) -> Result<String, AuthError> {
    let exp = (Utc::now() + Duration::minutes(expiry_minutes)).timestamp();
    let claims = AuthClaims { sub: user_id, exp };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::auth::middleware::decode_token;

    #[test]
    fn access_token_roundtrip() {
        let token = create_access_token("test-secret", 60, 42).unwrap();
        let claims = decode_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn token_with_wrong_secret_is_rejected() {
        let token = create_access_token("test-secret", 60, 42).unwrap();
        assert!(decode_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past any default validation leeway.
        let token = create_access_token("test-secret", -120, 42).unwrap();
        assert!(decode_token(&token, "test-secret").is_err());
    }
}
