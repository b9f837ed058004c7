use crate::service::validation_messages;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use shared::errors::{HttpError, ServiceError};
use validator::Validate;

/// `Json<T>` that also runs the derive-level validation rules, rejecting
/// with the field messages joined into one 400 body.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| HttpError::BadRequest(e.body_text()))?;

        if let Err(errors) = value.validate() {
            return Err(HttpError::from(ServiceError::Validation(
                validation_messages(&errors),
            )));
        }

        Ok(ValidatedJson(value))
    }
}
