use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Signup/signin payload.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct Credentials {
    pub email: String,
    #[schema(value_type = String, format = "password", example = "my-secret-password")]
    pub password: String,
}

/// Bearer token handed out on signup and signin.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Claims contained within an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthClaims {
    pub sub: i32, // Subject (user ID)
    pub exp: i64, // Expiration time
}
