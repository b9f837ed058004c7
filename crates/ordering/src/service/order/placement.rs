use crate::{
    abstract_trait::{
        DynCartRepository, DynMenuItemQueryRepository, DynNotifier, DynOrderCommandRepository,
        DynSettingsResolver, NewOrderNotification, OrderPlacementServiceTrait,
    },
    domain::{
        requests::order::{CreateOrderLineRecord, CreateOrderRecord, PlaceOrderRequest},
        response::{api::ApiResponse, order::PlaceOrderResponse},
    },
    service::validation_messages,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::ServiceError;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// Checkout. Everything the client sent except address/phone/notes/method is
/// ignored: quantities come from the stored cart and prices from the live
/// menu rows, re-read here.
pub struct OrderPlacementService {
    cart_repository: DynCartRepository,
    menu_item_repository: DynMenuItemQueryRepository,
    order_command_repository: DynOrderCommandRepository,
    settings_resolver: DynSettingsResolver,
    notifier: DynNotifier,
}

impl OrderPlacementService {
    pub fn new(
        cart_repository: DynCartRepository,
        menu_item_repository: DynMenuItemQueryRepository,
        order_command_repository: DynOrderCommandRepository,
        settings_resolver: DynSettingsResolver,
        notifier: DynNotifier,
    ) -> Self {
        Self {
            cart_repository,
            menu_item_repository,
            order_command_repository,
            settings_resolver,
            notifier,
        }
    }
}

#[async_trait]
impl OrderPlacementServiceTrait for OrderPlacementService {
    async fn place_order(
        &self,
        user_id: Uuid,
        req: &PlaceOrderRequest,
    ) -> Result<ApiResponse<PlaceOrderResponse>, ServiceError> {
        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_messages(&errors)));
        }

        let cart = self.cart_repository.find_by_user(user_id).await?;
        if cart.is_empty() {
            return Err(ServiceError::BusinessRule("Cart is empty".to_string()));
        }

        // Re-read every menu row so stale carts cannot smuggle in removed
        // items or old prices.
        let mut unavailable: Vec<String> = Vec::new();
        let mut lines: Vec<CreateOrderLineRecord> = Vec::with_capacity(cart.len());
        let mut subtotal = Decimal::ZERO;
        for cart_line in &cart {
            match self
                .menu_item_repository
                .find_by_id(cart_line.menu_item_id)
                .await?
            {
                Some(item) if item.is_available => {
                    let quantity = cart_line.quantity;
                    let total_price = item.price * Decimal::from(quantity);
                    subtotal += total_price;
                    lines.push(CreateOrderLineRecord {
                        menu_item_id: item.id,
                        quantity,
                        unit_price: item.price,
                        total_price,
                    });
                }
                Some(item) => unavailable.push(item.name),
                None => unavailable.push(cart_line.item_name.clone()),
            }
        }
        if !unavailable.is_empty() {
            return Err(ServiceError::BusinessRule(format!(
                "Some items in your cart are no longer available: {}",
                unavailable.join(", ")
            )));
        }

        let settings = self.settings_resolver.current().await;
        if subtotal < settings.min_order_price {
            let shortfall = settings.min_order_price - subtotal;
            return Err(ServiceError::BusinessRule(format!(
                "Minimum order amount is ₹{}. Add ₹{shortfall} more to proceed.",
                settings.min_order_price
            )));
        }

        if !settings.is_open_now() {
            return Err(ServiceError::BusinessRule(format!(
                "Restaurant is currently closed. Timings: {} - {}",
                settings.open_time, settings.close_time
            )));
        }

        let delivery_charge = settings.delivery_charge;
        let total_amount = subtotal + delivery_charge;

        let record = CreateOrderRecord {
            user_id,
            total_amount,
            delivery_address: req.normalized_address(),
            delivery_phone: req.normalized_phone(),
            delivery_notes: req.normalized_notes(),
            payment_method: req.payment_method,
        };

        let (order, _items) = self
            .order_command_repository
            .place_order(&record, &lines)
            .await?;

        info!(
            "✅ Order {} placed by user {user_id}: ₹{subtotal} + ₹{delivery_charge} delivery",
            order.id
        );

        // Fire-and-forget admin SMS; placement never fails on a dead
        // notification channel.
        let notifier = Arc::clone(&self.notifier);
        let notification = NewOrderNotification {
            order_id: order.id,
            amount: order.total_amount,
            phone: order.delivery_phone.clone(),
            address: order.delivery_address.clone(),
        };
        tokio::spawn(async move {
            if let Err(e) = notifier.notify_new_order(&notification).await {
                warn!(
                    "📵 Admin notification for order {} failed: {e}",
                    notification.order_id
                );
            }
        });

        Ok(ApiResponse::success(
            "Order placed successfully",
            PlaceOrderResponse {
                order: order.into(),
                total_amount,
                subtotal,
                delivery_charge,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cart_item::CartLineDetail;
    use crate::model::order::PaymentMethod;
    use crate::service::test_support::{
        FixedSettingsResolver, MockCartRepository, MockMenuItemRepository, MockNotifier,
        MockOrderCommandRepository,
    };

    struct Fixture {
        cart: Arc<MockCartRepository>,
        menu: Arc<MockMenuItemRepository>,
        command: Arc<MockOrderCommandRepository>,
        notifier: Arc<MockNotifier>,
    }

    impl Fixture {
        fn new(resolver: FixedSettingsResolver) -> (Self, OrderPlacementService) {
            let cart = Arc::new(MockCartRepository::default());
            let menu = Arc::new(MockMenuItemRepository::default());
            let command = Arc::new(MockOrderCommandRepository::default());
            let notifier = Arc::new(MockNotifier::default());
            let service = OrderPlacementService::new(
                Arc::clone(&cart) as DynCartRepository,
                Arc::clone(&menu) as DynMenuItemQueryRepository,
                Arc::clone(&command) as DynOrderCommandRepository,
                Arc::new(resolver),
                Arc::clone(&notifier) as DynNotifier,
            );
            (
                Self {
                    cart,
                    menu,
                    command,
                    notifier,
                },
                service,
            )
        }
    }

    fn request() -> PlaceOrderRequest {
        PlaceOrderRequest {
            delivery_address: "42 MG Road, Bengaluru".to_string(),
            delivery_phone: "+91 97336-74981".to_string(),
            delivery_notes: Some("  ring twice  ".to_string()),
            payment_method: PaymentMethod::Cash,
        }
    }

    fn cart_line(menu_item_id: Uuid, quantity: i32, stale_price: i64) -> CartLineDetail {
        CartLineDetail {
            id: Uuid::new_v4(),
            menu_item_id,
            quantity,
            item_name: "stale name".to_string(),
            unit_price: Decimal::from(stale_price),
            is_available: true,
        }
    }

    #[tokio::test]
    async fn rejects_when_restaurant_closed() {
        let (fx, service) = Fixture::new(FixedSettingsResolver::closed());
        let user = Uuid::new_v4();
        let thali = fx.menu.insert("Veg Thali", Decimal::from(150), true);
        fx.cart.seed_line(user, cart_line(thali, 1, 150));

        let err = service.place_order(user, &request()).await.unwrap_err();
        assert!(
            matches!(err, ServiceError::BusinessRule(msg) if msg.contains("currently closed"))
        );
    }

    #[tokio::test]
    async fn rejects_empty_cart() {
        let (_fx, service) = Fixture::new(FixedSettingsResolver::always_open(100, 50));
        let err = service
            .place_order(Uuid::new_v4(), &request())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::BusinessRule(msg) if msg == "Cart is empty"));
    }

    #[tokio::test]
    async fn lists_every_unavailable_item_by_name() {
        let (fx, service) = Fixture::new(FixedSettingsResolver::always_open(100, 50));
        let user = Uuid::new_v4();
        let dosa = fx.menu.insert("Masala Dosa", Decimal::from(90), true);
        let idli = fx.menu.insert("Idli Sambar", Decimal::from(60), true);
        fx.cart.seed_line(user, cart_line(dosa, 1, 90));
        fx.cart.seed_line(user, cart_line(idli, 2, 60));
        fx.cart.seed_line(user, cart_line(Uuid::new_v4(), 1, 10));
        // sold out between add-to-cart and checkout
        fx.menu.set_available(dosa, false);

        let err = service.place_order(user, &request()).await.unwrap_err();
        let ServiceError::BusinessRule(msg) = err else {
            panic!("expected business rule error");
        };
        assert!(msg.contains("no longer available"));
        assert!(msg.contains("Masala Dosa"));
        assert!(msg.contains("stale name"));
        assert!(!msg.contains("Idli Sambar"));
    }

    #[tokio::test]
    async fn enforces_minimum_order_with_shortfall() {
        let (fx, service) = Fixture::new(FixedSettingsResolver::always_open(200, 50));
        let user = Uuid::new_v4();
        let coffee = fx.menu.insert("Filter Coffee", Decimal::from(40), true);
        fx.cart.seed_line(user, cart_line(coffee, 3, 40));

        let err = service.place_order(user, &request()).await.unwrap_err();
        let ServiceError::BusinessRule(msg) = err else {
            panic!("expected business rule error");
        };
        // subtotal 120, minimum 200
        assert!(msg.contains("₹200"));
        assert!(msg.contains("₹80"));
    }

    #[tokio::test]
    async fn prices_from_live_menu_not_cart_snapshot() {
        let (fx, service) = Fixture::new(FixedSettingsResolver::always_open(100, 50));
        let user = Uuid::new_v4();
        let thali = fx.menu.insert("Veg Thali", Decimal::from(120), true);
        fx.cart.seed_line(user, cart_line(thali, 2, 120));
        // price revised after the cart was filled
        fx.menu.set_price(thali, Decimal::from(150));

        let resp = service.place_order(user, &request()).await.unwrap();
        assert_eq!(resp.data.subtotal, Decimal::from(300));
        assert_eq!(resp.data.delivery_charge, Decimal::from(50));
        assert_eq!(resp.data.total_amount, Decimal::from(350));

        let placed = fx.command.placed.lock().unwrap();
        let (record, lines) = &placed[0];
        assert_eq!(record.total_amount, Decimal::from(350));
        assert_eq!(lines[0].unit_price, Decimal::from(150));
        assert_eq!(record.delivery_phone, "+919733674981");
        assert_eq!(record.delivery_notes.as_deref(), Some("ring twice"));
    }

    #[tokio::test]
    async fn rejects_invalid_delivery_details_before_any_pricing() {
        let (_fx, service) = Fixture::new(FixedSettingsResolver::always_open(100, 50));
        let mut req = request();
        req.delivery_address = "short".to_string();

        let err = service.place_order(Uuid::new_v4(), &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn placement_conflict_propagates() {
        let (fx, service) = Fixture::new(FixedSettingsResolver::always_open(100, 50));
        let user = Uuid::new_v4();
        let thali = fx.menu.insert("Veg Thali", Decimal::from(150), true);
        fx.cart.seed_line(user, cart_line(thali, 1, 150));
        *fx.command.fail_place_with_conflict.lock().unwrap() = true;

        let err = service.place_order(user, &request()).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(shared::errors::RepositoryError::Conflict(_))
        ));
        assert!(fx.notifier.new_orders.lock().unwrap().is_empty());
    }
}
