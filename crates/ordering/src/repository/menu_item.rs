use crate::{abstract_trait::MenuItemQueryRepositoryTrait, model::menu_item::MenuItem};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct MenuItemQueryRepository {
    db: ConnectionPool,
}

impl MenuItemQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuItemQueryRepositoryTrait for MenuItemQueryRepository {
    async fn find_available(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, name, price, original_price, is_available, preparation_time,
                   created_at, updated_at
            FROM menu_items
            WHERE is_available = TRUE
            ORDER BY name
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch menu items: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, name, price, original_price, is_available, preparation_time,
                   created_at, updated_at
            FROM menu_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch menu item {id}: {e:?}");
            RepositoryError::from(e)
        })
    }
}
