pub mod admin;
pub mod cart;
pub mod menu;
pub mod order;
pub mod payment;
pub mod settings;

use crate::{middleware, state::AppState};
use anyhow::Context;
use axum::middleware::{from_fn, from_fn_with_state};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    tags(
        (name = "cart", description = "Cart management"),
        (name = "menu", description = "Available menu items"),
        (name = "settings", description = "Restaurant settings and open state"),
        (name = "order", description = "Order placement and lifecycle"),
        (name = "payment", description = "Online payment flow"),
        (name = "admin", description = "Admin order management"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, state: AppState) -> anyhow::Result<()> {
        let public = OpenApiRouter::new()
            .routes(routes!(settings::get_settings))
            .routes(routes!(menu::list_menu));

        let protected = OpenApiRouter::new()
            .routes(routes!(cart::get_cart, cart::clear_cart))
            .routes(routes!(cart::add_cart_item))
            .routes(routes!(cart::update_cart_item, cart::remove_cart_item))
            .routes(routes!(order::place_order, order::my_orders))
            .routes(routes!(order::get_order))
            .routes(routes!(order::cancel_order))
            .routes(routes!(payment::create_payment_order))
            .routes(routes!(payment::confirm_payment))
            .routes(routes!(payment::abandon_payment))
            .layer(from_fn_with_state(state.clone(), middleware::auth));

        let admin_routes = OpenApiRouter::new()
            .routes(routes!(admin::update_order_status))
            .routes(routes!(admin::list_orders))
            .layer(from_fn(middleware::require_admin))
            .layer(from_fn_with_state(state.clone(), middleware::auth));

        let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(public)
            .merge(protected)
            .merge(admin_routes)
            .split_for_parts();

        let app = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
            .with_state(state);

        let addr = format!("0.0.0.0:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!("🚀 Ordering service listening on {addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shared::utils::shutdown_signal())
            .await
            .context("server error")?;

        Ok(())
    }
}
