use crate::{
    abstract_trait::CartRepositoryTrait,
    model::cart_item::{CartItem, CartLineDetail},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

const LINE_DETAIL_COLUMNS: &str = r#"
    c.id,
    c.menu_item_id,
    c.quantity,
    m.name AS item_name,
    m.price AS unit_price,
    m.is_available
"#;

#[derive(Clone)]
pub struct CartRepository {
    db: ConnectionPool,
}

impl CartRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<CartLineDetail>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = format!(
            r#"
            SELECT {LINE_DETAIL_COLUMNS}
            FROM cart_items c
            JOIN menu_items m ON m.id = c.menu_item_id
            WHERE c.user_id = $1
            ORDER BY c.created_at
            "#
        );

        sqlx::query_as::<_, CartLineDetail>(&query)
            .bind(user_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch cart for user {user_id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn upsert_line(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, CartItem>(
            r#"
            INSERT INTO cart_items (user_id, menu_item_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, menu_item_id)
            DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity,
                          updated_at = current_timestamp
            RETURNING id, user_id, menu_item_id, quantity, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(menu_item_id)
        .bind(quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to upsert cart line for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Cart line for user {user_id}: item {menu_item_id} now x{}",
            item.quantity
        );
        Ok(item)
    }

    async fn set_quantity(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CartItem>(
            r#"
            UPDATE cart_items
            SET quantity = $3, updated_at = current_timestamp
            WHERE user_id = $1 AND menu_item_id = $2
            RETURNING id, user_id, menu_item_id, quantity, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(menu_item_id)
        .bind(quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            other => {
                error!("❌ Failed to update cart quantity for user {user_id}: {other:?}");
                RepositoryError::from(other)
            }
        })
    }

    async fn delete_line(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM cart_items
            WHERE user_id = $1 AND menu_item_id = $2
            "#,
        )
        .bind(user_id)
        .bind(menu_item_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete cart line for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self, user_id: Uuid) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to clear cart for user {user_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        info!(
            "🗑️ Cleared {} cart line(s) for user {user_id}",
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }
}
