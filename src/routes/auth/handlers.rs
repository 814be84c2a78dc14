use crate::api_state::ApiContext;
use crate::routes::auth::error::AuthError;
use crate::routes::auth::interfaces::{Credentials, TokenResponse};
use crate::routes::auth::service::{authenticate_user, create_access_token, signup_user};
use crate::routes::extract::JsonOrForm;
use axum::{Json, extract::State};

/// Register a new account.
///
/// Creates the user and immediately hands out an access token.
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "Auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "Account created; token issued.", body = TokenResponse),
        (status = 409, description = "A user with this email already exists."),
        (status = 500, description = "A database or internal error occurred."),
    )
)]
pub async fn signup(
    State(context): State<ApiContext>,
    JsonOrForm(payload): JsonOrForm<Credentials>,
) -> Result<Json<TokenResponse>, AuthError> {
    let user = signup_user(&context.pool, &payload).await?;
    let token = create_access_token(
        &context.settings.secrets.jwt,
        context.settings.auth.access_token_expiry_minutes,
        user.id,
    )?;
    Ok(Json(TokenResponse { token }))
}

/// Sign in with email and password.
#[utoipa::path(
    post,
    path = "/auth/signin",
    tag = "Auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "Credentials accepted; token issued.", body = TokenResponse),
        (status = 401, description = "Invalid email or password."),
        (status = 500, description = "A database or internal error occurred."),
    )
)]
pub async fn signin(
    State(context): State<ApiContext>,
    JsonOrForm(payload): JsonOrForm<Credentials>,
) -> Result<Json<TokenResponse>, AuthError> {
    let user = authenticate_user(&context.pool, &payload.email, &payload.password).await?;
    let token = create_access_token(
        &context.settings.secrets.jwt,
        context.settings.auth.access_token_expiry_minutes,
        user.id,
    )?;
    Ok(Json(TokenResponse { token }))
}
