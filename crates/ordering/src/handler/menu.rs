use crate::{
    domain::response::{api::ApiResponse, menu::MenuItemResponse},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared::errors::{HttpError, ServiceError};

#[utoipa::path(
    get,
    path = "/api/menu",
    tag = "menu",
    responses(
        (status = 200, description = "Available menu items", body = ApiResponse<Vec<MenuItemResponse>>)
    )
)]
pub async fn list_menu(State(state): State<AppState>) -> Result<impl IntoResponse, HttpError> {
    let items = state
        .di_container
        .menu_item_repository
        .find_available()
        .await
        .map_err(ServiceError::from)?;

    let items: Vec<MenuItemResponse> = items.into_iter().map(Into::into).collect();
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Menu retrieved successfully", items)),
    ))
}
