use crate::{
    domain::response::{api::ApiResponse, settings::SettingsResponse},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared::errors::HttpError;

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Resolved settings and current open state", body = ApiResponse<SettingsResponse>)
    )
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, HttpError> {
    let settings = state.di_container.settings_resolver.current().await;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Settings retrieved successfully",
            SettingsResponse::from(settings),
        )),
    ))
}
