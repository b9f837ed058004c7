use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use shared::errors::HttpError;

const TOKEN_COOKIE: &str = "token";

/// Pulls the JWT from the `token` cookie or the `Authorization: Bearer`
/// header, verifies it, and parks the claims in request extensions for the
/// handlers downstream.
pub async fn auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, HttpError> {
    let token = jar
        .get(TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "))
                .map(str::to_string)
        });

    let Some(token) = token else {
        return Err(HttpError::Unauthorized(
            "Missing authentication token".to_string(),
        ));
    };

    let claims = state
        .jwt_service
        .verify_token(&token)
        .map_err(HttpError::from)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
