use crate::{
    domain::{
        requests::cart::{AddCartItemRequest, UpdateCartQuantityRequest},
        response::{api::ApiResponse, cart::CartResponse},
    },
    middleware::ValidatedJson,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use shared::{config::Claims, errors::HttpError};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/cart",
    tag = "cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current cart with totals", body = ApiResponse<CartResponse>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .cart_service
        .get_cart(claims.user_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/cart/items",
    tag = "cart",
    security(("bearer_auth" = [])),
    request_body = AddCartItemRequest,
    responses(
        (status = 200, description = "Item added or merged", body = ApiResponse<CartResponse>),
        (status = 400, description = "Invalid quantity or unavailable item"),
        (status = 404, description = "Menu item not found")
    )
)]
pub async fn add_cart_item(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(req): ValidatedJson<AddCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .cart_service
        .add_item(claims.user_id, &req)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/cart/items/{menu_item_id}",
    tag = "cart",
    security(("bearer_auth" = [])),
    params(("menu_item_id" = Uuid, Path, description = "Menu item of the cart line")),
    request_body = UpdateCartQuantityRequest,
    responses(
        (status = 200, description = "Quantity updated (zero removes the line)", body = ApiResponse<CartResponse>),
        (status = 404, description = "No such line in the cart")
    )
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(menu_item_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateCartQuantityRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .cart_service
        .update_quantity(claims.user_id, menu_item_id, req.quantity)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/cart/items/{menu_item_id}",
    tag = "cart",
    security(("bearer_auth" = [])),
    params(("menu_item_id" = Uuid, Path, description = "Menu item of the cart line")),
    responses(
        (status = 200, description = "Line removed", body = ApiResponse<CartResponse>),
        (status = 404, description = "No such line in the cart")
    )
)]
pub async fn remove_cart_item(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(menu_item_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .cart_service
        .remove_item(claims.user_id, menu_item_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    tag = "cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cart emptied", body = ApiResponse<CartResponse>)
    )
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .cart_service
        .clear_cart(claims.user_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}
