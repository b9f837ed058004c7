use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    domain::requests::order::{CreateOrderLineRecord, CreateOrderRecord},
    model::{
        order::{Order, OrderStatus},
        order_item::OrderItem,
    },
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

const ORDER_COLUMNS: &str = r#"
    id, user_id, total_amount, delivery_address, delivery_phone, delivery_notes,
    payment_method, status, payment_status, created_at, updated_at
"#;

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn place_order(
        &self,
        order: &CreateOrderRecord,
        lines: &[CreateOrderLineRecord],
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let insert_order = format!(
            r#"
            INSERT INTO orders
                (user_id, total_amount, delivery_address, delivery_phone,
                 delivery_notes, payment_method, status, payment_status)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', 'pending')
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Order>(&insert_order)
            .bind(order.user_id)
            .bind(order.total_amount)
            .bind(&order.delivery_address)
            .bind(&order.delivery_phone)
            .bind(&order.delivery_notes)
            .bind(order.payment_method)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to create order for user {}: {e:?}",
                    order.user_id
                );
                RepositoryError::from(e)
            })?;

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let item = sqlx::query_as::<_, OrderItem>(
                r#"
                INSERT INTO order_items
                    (order_id, menu_item_id, quantity, unit_price, total_price)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, order_id, menu_item_id, quantity, unit_price,
                          total_price, created_at
                "#,
            )
            .bind(created.id)
            .bind(line.menu_item_id)
            .bind(line.quantity)
            .bind(line.unit_price)
            .bind(line.total_price)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to create order item for order {}: {e:?}", created.id);
                RepositoryError::from(e)
            })?;
            items.push(item);
        }

        // Consume the cart inside the same transaction. If another placement
        // got here first the row count will not match the priced lines and
        // everything rolls back, so a cart converts exactly once.
        let deleted = sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(order.user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to consume cart for user {}: {e:?}",
                    order.user_id
                );
                RepositoryError::from(e)
            })?
            .rows_affected();

        if deleted != lines.len() as u64 {
            return Err(RepositoryError::Conflict(
                "Cart changed during checkout".into(),
            ));
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order {} for user {} ({} item(s))",
            created.id,
            created.user_id,
            items.len()
        );
        Ok((created, items))
    }

    async fn update_status(
        &self,
        order_id: Uuid,
        next: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = format!(
            r#"
            UPDATE orders
            SET status = $2, updated_at = current_timestamp
            WHERE id = $1
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let order = sqlx::query_as::<_, Order>(&query)
            .bind(order_id)
            .bind(next)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => RepositoryError::NotFound,
                other => {
                    error!("❌ Failed to update status of order {order_id}: {other:?}");
                    RepositoryError::from(other)
                }
            })?;

        info!("🔄 Order {order_id} moved to {}", next.as_str());
        Ok(order)
    }

    async fn cancel_if_eligible(
        &self,
        order_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // The eligibility window is re-checked against the stored status in
        // the same statement that mutates it; a stale client cannot cancel
        // an order the kitchen already started.
        let query = format!(
            r#"
            UPDATE orders
            SET status = 'cancelled', updated_at = current_timestamp
            WHERE id = $1 AND user_id = $2 AND status IN ('pending', 'confirmed')
            RETURNING {ORDER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Order>(&query)
            .bind(order_id)
            .bind(user_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to cancel order {order_id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn mark_paid(
        &self,
        order_id: Uuid,
        user_id: Uuid,
        payment_id: &str,
    ) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = format!(
            r#"
            UPDATE orders
            SET payment_status = 'paid', updated_at = current_timestamp
            WHERE id = $1 AND user_id = $2
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let order = sqlx::query_as::<_, Order>(&query)
            .bind(order_id)
            .bind(user_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => RepositoryError::NotFound,
                other => {
                    error!("❌ Failed to mark order {order_id} paid: {other:?}");
                    RepositoryError::from(other)
                }
            })?;

        info!("💰 Order {order_id} marked paid (gateway payment {payment_id})");
        Ok(order)
    }

    async fn delete_awaiting_payment(
        &self,
        order_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM orders
            WHERE id = $1 AND user_id = $2
              AND status = 'pending' AND payment_status = 'pending'
            "#,
        )
        .bind(order_id)
        .bind(user_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete pending order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("🗑️ Deleted pending order {order_id} (payment not completed)");
        }
        Ok(deleted)
    }
}
