use crate::model::menu_item::MenuItem;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynMenuItemQueryRepository = Arc<dyn MenuItemQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MenuItemQueryRepositoryTrait {
    async fn find_available(&self) -> Result<Vec<MenuItem>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, RepositoryError>;
}
