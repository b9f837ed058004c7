use crate::{
    domain::{
        requests::order::{AdminOrderFilter, UpdateOrderStatusRequest},
        response::{
            api::ApiResponse,
            order::{OrderDetailResponse, OrderResponse},
        },
    },
    middleware::ValidatedJson,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::errors::HttpError;
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Transition not allowed"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Unknown order")
    )
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_lifecycle_service
        .update_status(id, req.status)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(AdminOrderFilter),
    responses(
        (status = 200, description = "All orders, optionally filtered by status", body = ApiResponse<Vec<OrderDetailResponse>>),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(filter): Query<AdminOrderFilter>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .order_lifecycle_service
        .list_orders(filter.status)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}
