use crate::{
    domain::{
        requests::payment::{
            AbandonPaymentRequest, ConfirmPaymentRequest, CreatePaymentOrderRequest,
        },
        response::{
            api::ApiResponse, order::OrderResponse, payment::PaymentOrderResponse,
        },
    },
    middleware::ValidatedJson,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use shared::{config::Claims, errors::HttpError};

#[utoipa::path(
    post,
    path = "/api/payments/order",
    tag = "payment",
    security(("bearer_auth" = [])),
    request_body = CreatePaymentOrderRequest,
    responses(
        (status = 200, description = "Gateway order created", body = ApiResponse<PaymentOrderResponse>),
        (status = 400, description = "Order not payable online or not awaiting payment"),
        (status = 404, description = "Unknown or not owned by the caller"),
        (status = 502, description = "Gateway unavailable; pending order rolled back")
    )
)]
pub async fn create_payment_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(req): ValidatedJson<CreatePaymentOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .payment_service
        .create_gateway_order(claims.user_id, req.order_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/payments/confirm",
    tag = "payment",
    security(("bearer_auth" = [])),
    request_body = ConfirmPaymentRequest,
    responses(
        (status = 200, description = "Order marked paid", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Unknown or not owned by the caller"),
        (status = 500, description = "Payment captured but order update failed")
    )
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(req): ValidatedJson<ConfirmPaymentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .payment_service
        .confirm_payment(claims.user_id, &req)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/payments/abandon",
    tag = "payment",
    security(("bearer_auth" = [])),
    request_body = AbandonPaymentRequest,
    responses(
        (status = 200, description = "Pending order removed"),
        (status = 400, description = "Order is not awaiting payment")
    )
)]
pub async fn abandon_payment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(req): ValidatedJson<AbandonPaymentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .payment_service
        .abandon_payment(claims.user_id, req.order_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}
