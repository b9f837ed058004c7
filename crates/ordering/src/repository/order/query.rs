use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    model::order::{Order, OrderStatus},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;
use uuid::Uuid;

const ORDER_COLUMNS: &str = r#"
    id, user_id, total_amount, delivery_address, delivery_phone, delivery_notes,
    payment_method, status, payment_status, created_at, updated_at
"#;

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");

        sqlx::query_as::<_, Order>(&query)
            .bind(order_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order {order_id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_id_and_user(
        &self,
        order_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 AND user_id = $2");

        sqlx::query_as::<_, Order>(&query)
            .bind(order_id)
            .bind(user_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order {order_id} for user {user_id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        );

        sqlx::query_as::<_, Order>(&query)
            .bind(user_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders for user {user_id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_all(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders
            WHERE ($1::order_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#
        );

        sqlx::query_as::<_, Order>(&query)
            .bind(status)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders: {e:?}");
                RepositoryError::from(e)
            })
    }
}
