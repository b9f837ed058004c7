use axum::{body::Body, http::Request, middleware::Next, response::Response};
use shared::{config::Claims, errors::HttpError};

/// Runs behind `auth`, so the claims are already in extensions. Non-admin
/// callers on admin routes get a 403, not a 404.
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, HttpError> {
    match req.extensions().get::<Claims>() {
        Some(claims) if claims.is_admin() => Ok(next.run(req).await),
        Some(_) => Err(HttpError::Forbidden("Admin access required".to_string())),
        None => Err(HttpError::Unauthorized(
            "Missing authentication token".to_string(),
        )),
    }
}
