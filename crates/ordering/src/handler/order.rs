use crate::{
    domain::{
        requests::order::PlaceOrderRequest,
        response::{
            api::ApiResponse,
            order::{OrderDetailResponse, OrderResponse, PlaceOrderResponse},
        },
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
    post,
    path = "/api/orders",
    tag = "order",
    security(("bearer_auth" = [])),
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = ApiResponse<PlaceOrderResponse>),
        (status = 400, description = "Validation or business rule failure"),
        (status = 409, description = "Cart changed during checkout")
    )
)]
pub async fn place_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(req): ValidatedJson<PlaceOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_placement_service
        .place_order(claims.user_id, &req)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's orders with items", body = ApiResponse<Vec<OrderDetailResponse>>)
    )
)]
pub async fn my_orders(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_lifecycle_service
        .my_orders(claims.user_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "order",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with items", body = ApiResponse<OrderDetailResponse>),
        (status = 404, description = "Unknown or not owned by the caller")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_lifecycle_service
        .find_order(claims.user_id, claims.is_admin(), id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/cancel",
    tag = "order",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order cancelled", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Past the cancellation window"),
        (status = 404, description = "Unknown or not owned by the caller")
    )
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_lifecycle_service
        .cancel_order(claims.user_id, id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}
