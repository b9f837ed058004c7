//! In-memory stand-ins for the repository and gateway seams, shared by the
//! service unit tests.

use crate::{
    abstract_trait::{
        CartRepositoryTrait, GatewayOrder, MenuItemQueryRepositoryTrait, NewOrderNotification,
        NotifierTrait, OrderCommandRepositoryTrait, OrderItemQueryRepositoryTrait,
        OrderQueryRepositoryTrait, PaymentGatewayTrait, SettingsRepositoryTrait,
        SettingsResolverTrait,
    },
    domain::requests::order::{CreateOrderLineRecord, CreateOrderRecord},
    model::{
        cart_item::{CartItem, CartLineDetail},
        menu_item::MenuItem,
        order::{Order, OrderStatus, PaymentMethod, PaymentStatus},
        order_item::OrderItem,
        settings::{RestaurantSettings, SettingRow},
    },
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::{RepositoryError, ServiceError};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

pub fn sample_order(
    user_id: Uuid,
    total: Decimal,
    method: PaymentMethod,
    status: OrderStatus,
    payment_status: PaymentStatus,
) -> Order {
    Order {
        id: Uuid::new_v4(),
        user_id,
        total_amount: total,
        delivery_address: "42 MG Road, Bengaluru".to_string(),
        delivery_phone: "+919733674981".to_string(),
        delivery_notes: None,
        payment_method: method,
        status,
        payment_status,
        created_at: None,
        updated_at: None,
    }
}

#[derive(Default)]
pub struct MockMenuItemRepository {
    items: Mutex<HashMap<Uuid, MenuItem>>,
}

impl MockMenuItemRepository {
    pub fn insert(&self, name: &str, price: Decimal, is_available: bool) -> Uuid {
        let id = Uuid::new_v4();
        self.items.lock().unwrap().insert(
            id,
            MenuItem {
                id,
                name: name.to_string(),
                price,
                original_price: None,
                is_available,
                preparation_time: None,
                created_at: None,
                updated_at: None,
            },
        );
        id
    }

    pub fn set_price(&self, id: Uuid, price: Decimal) {
        if let Some(item) = self.items.lock().unwrap().get_mut(&id) {
            item.price = price;
        }
    }

    pub fn set_available(&self, id: Uuid, is_available: bool) {
        if let Some(item) = self.items.lock().unwrap().get_mut(&id) {
            item.is_available = is_available;
        }
    }
}

#[async_trait]
impl MenuItemQueryRepositoryTrait for MockMenuItemRepository {
    async fn find_available(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut items: Vec<MenuItem> = self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|i| i.is_available)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, RepositoryError> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }
}

/// Cart lines keyed by user. The joined name/price/availability columns are
/// frozen at insert time, mirroring how the SQL join snapshots them.
#[derive(Default)]
pub struct MockCartRepository {
    lines: Mutex<Vec<(Uuid, CartLineDetail)>>,
}

impl MockCartRepository {
    pub fn seed_line(&self, user_id: Uuid, line: CartLineDetail) {
        self.lines.lock().unwrap().push((user_id, line));
    }

    fn to_cart_item(user_id: Uuid, line: &CartLineDetail) -> CartItem {
        CartItem {
            id: line.id,
            user_id,
            menu_item_id: line.menu_item_id,
            quantity: line.quantity,
            created_at: None,
            updated_at: None,
        }
    }
}

#[async_trait]
impl CartRepositoryTrait for MockCartRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<CartLineDetail>, RepositoryError> {
        Ok(self
            .lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _)| *u == user_id)
            .map(|(_, l)| l.clone())
            .collect())
    }

    async fn upsert_line(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let mut lines = self.lines.lock().unwrap();
        if let Some((_, line)) = lines
            .iter_mut()
            .find(|(u, l)| *u == user_id && l.menu_item_id == menu_item_id)
        {
            line.quantity += quantity;
            return Ok(Self::to_cart_item(user_id, line));
        }
        let line = CartLineDetail {
            id: Uuid::new_v4(),
            menu_item_id,
            quantity,
            item_name: format!("item-{menu_item_id}"),
            unit_price: Decimal::ZERO,
            is_available: true,
        };
        lines.push((user_id, line.clone()));
        Ok(Self::to_cart_item(user_id, &line))
    }

    async fn set_quantity(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let mut lines = self.lines.lock().unwrap();
        let Some((_, line)) = lines
            .iter_mut()
            .find(|(u, l)| *u == user_id && l.menu_item_id == menu_item_id)
        else {
            return Err(RepositoryError::NotFound);
        };
        line.quantity = quantity;
        Ok(Self::to_cart_item(user_id, line))
    }

    async fn delete_line(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
    ) -> Result<bool, RepositoryError> {
        let mut lines = self.lines.lock().unwrap();
        let before = lines.len();
        lines.retain(|(u, l)| !(*u == user_id && l.menu_item_id == menu_item_id));
        Ok(lines.len() < before)
    }

    async fn clear(&self, user_id: Uuid) -> Result<u64, RepositoryError> {
        let mut lines = self.lines.lock().unwrap();
        let before = lines.len();
        lines.retain(|(u, _)| *u != user_id);
        Ok((before - lines.len()) as u64)
    }
}

pub struct MockSettingsRepository {
    rows: Mutex<Vec<SettingRow>>,
}

impl MockSettingsRepository {
    pub fn new(rows: Vec<SettingRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn replace(&self, rows: Vec<SettingRow>) {
        *self.rows.lock().unwrap() = rows;
    }
}

#[async_trait]
impl SettingsRepositoryTrait for MockSettingsRepository {
    async fn fetch_all(&self) -> Result<Vec<SettingRow>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

/// Resolver pinned to one snapshot. Always-open and always-closed variants
/// sidestep the wall clock in tests.
pub struct FixedSettingsResolver {
    settings: RestaurantSettings,
}

impl FixedSettingsResolver {
    pub fn new(settings: RestaurantSettings) -> Self {
        Self { settings }
    }

    pub fn always_open(min_order_price: i64, delivery_charge: i64) -> Self {
        Self::new(RestaurantSettings::from_rows(&[
            setting("open_time", "00:00"),
            setting("close_time", "23:59"),
            setting("min_order_price", &min_order_price.to_string()),
            setting("delivery_charge", &delivery_charge.to_string()),
        ]))
    }

    pub fn closed() -> Self {
        Self::new(RestaurantSettings::from_rows(&[setting("is_open", "false")]))
    }
}

pub fn setting(key: &str, value: &str) -> SettingRow {
    SettingRow {
        setting_key: key.to_string(),
        setting_value: value.to_string(),
        updated_at: None,
    }
}

#[async_trait]
impl SettingsResolverTrait for FixedSettingsResolver {
    async fn current(&self) -> RestaurantSettings {
        self.settings.clone()
    }

    async fn refresh(&self) -> Result<RestaurantSettings, ServiceError> {
        Ok(self.settings.clone())
    }
}

#[derive(Default)]
pub struct MockOrderCommandRepository {
    pub placed: Mutex<Vec<(CreateOrderRecord, Vec<CreateOrderLineRecord>)>>,
    pub orders: Mutex<HashMap<Uuid, Order>>,
    pub deleted: Mutex<Vec<Uuid>>,
    pub fail_place_with_conflict: Mutex<bool>,
    pub fail_mark_paid: Mutex<bool>,
}

impl MockOrderCommandRepository {
    pub fn seed_order(&self, order: Order) {
        self.orders.lock().unwrap().insert(order.id, order);
    }

    pub fn stored(&self, order_id: Uuid) -> Option<Order> {
        self.orders.lock().unwrap().get(&order_id).cloned()
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MockOrderCommandRepository {
    async fn place_order(
        &self,
        order: &CreateOrderRecord,
        lines: &[CreateOrderLineRecord],
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        if *self.fail_place_with_conflict.lock().unwrap() {
            return Err(RepositoryError::Conflict(
                "Cart changed during checkout".into(),
            ));
        }
        self.placed
            .lock()
            .unwrap()
            .push((order.clone(), lines.to_vec()));

        let created = Order {
            id: Uuid::new_v4(),
            user_id: order.user_id,
            total_amount: order.total_amount,
            delivery_address: order.delivery_address.clone(),
            delivery_phone: order.delivery_phone.clone(),
            delivery_notes: order.delivery_notes.clone(),
            payment_method: order.payment_method,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            created_at: None,
            updated_at: None,
        };
        let items = lines
            .iter()
            .map(|l| OrderItem {
                id: Uuid::new_v4(),
                order_id: created.id,
                menu_item_id: l.menu_item_id,
                quantity: l.quantity,
                unit_price: l.unit_price,
                total_price: l.total_price,
                created_at: None,
            })
            .collect();
        self.orders
            .lock()
            .unwrap()
            .insert(created.id, created.clone());
        Ok((created, items))
    }

    async fn update_status(
        &self,
        order_id: Uuid,
        next: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders.get_mut(&order_id).ok_or(RepositoryError::NotFound)?;
        order.status = next;
        Ok(order.clone())
    }

    async fn cancel_if_eligible(
        &self,
        order_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Order>, RepositoryError> {
        let mut orders = self.orders.lock().unwrap();
        let Some(order) = orders.get_mut(&order_id) else {
            return Ok(None);
        };
        if order.user_id != user_id || !order.status.user_cancellable() {
            return Ok(None);
        }
        order.status = OrderStatus::Cancelled;
        Ok(Some(order.clone()))
    }

    async fn mark_paid(
        &self,
        order_id: Uuid,
        user_id: Uuid,
        _payment_id: &str,
    ) -> Result<Order, RepositoryError> {
        if *self.fail_mark_paid.lock().unwrap() {
            return Err(RepositoryError::Custom("connection reset".into()));
        }
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .values_mut()
            .find(|o| o.id == order_id && o.user_id == user_id)
            .ok_or(RepositoryError::NotFound)?;
        order.payment_status = PaymentStatus::Paid;
        Ok(order.clone())
    }

    async fn delete_awaiting_payment(
        &self,
        order_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, RepositoryError> {
        let mut orders = self.orders.lock().unwrap();
        let eligible = orders
            .get(&order_id)
            .is_some_and(|o| o.user_id == user_id && o.awaiting_payment());
        if eligible {
            orders.remove(&order_id);
            self.deleted.lock().unwrap().push(order_id);
        }
        Ok(eligible)
    }
}

#[derive(Default)]
pub struct MockOrderQueryRepository {
    pub orders: Mutex<Vec<Order>>,
}

impl MockOrderQueryRepository {
    pub fn seed(&self, order: Order) {
        self.orders.lock().unwrap().push(order);
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MockOrderQueryRepository {
    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, RepositoryError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == order_id)
            .cloned())
    }

    async fn find_by_id_and_user(
        &self,
        order_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Order>, RepositoryError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == order_id && o.user_id == user_id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| status.is_none_or(|s| o.status == s))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MockOrderItemQueryRepository {
    pub items: Mutex<Vec<OrderItem>>,
}

#[async_trait]
impl OrderItemQueryRepositoryTrait for MockOrderItemQueryRepository {
    async fn find_by_order(&self, order_id: Uuid) -> Result<Vec<OrderItem>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MockPaymentGateway {
    pub calls: Mutex<Vec<(i64, String, String)>>,
    pub fail: Mutex<bool>,
}

#[async_trait]
impl PaymentGatewayTrait for MockPaymentGateway {
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, ServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push((amount_minor, currency.to_string(), receipt.to_string()));
        if *self.fail.lock().unwrap() {
            return Err(ServiceError::Gateway("upstream 503".into()));
        }
        Ok(GatewayOrder {
            id: "order_MOCK0000000001".to_string(),
            amount: amount_minor,
            currency: currency.to_string(),
        })
    }
}

#[derive(Default)]
pub struct MockNotifier {
    pub new_orders: Mutex<Vec<NewOrderNotification>>,
    pub status_updates: Mutex<Vec<(String, Uuid, OrderStatus)>>,
}

#[async_trait]
impl NotifierTrait for MockNotifier {
    async fn notify_new_order(&self, n: &NewOrderNotification) -> Result<(), ServiceError> {
        self.new_orders.lock().unwrap().push(n.clone());
        Ok(())
    }

    async fn notify_order_status(
        &self,
        phone: &str,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<(), ServiceError> {
        self.status_updates
            .lock()
            .unwrap()
            .push((phone.to_string(), order_id, status));
        Ok(())
    }
}
