use crate::model::settings::{RestaurantSettings, SettingRow};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynSettingsRepository = Arc<dyn SettingsRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SettingsRepositoryTrait {
    async fn fetch_all(&self) -> Result<Vec<SettingRow>, RepositoryError>;
}

pub type DynSettingsResolver = Arc<dyn SettingsResolverTrait + Send + Sync>;

/// Read model over the key/value settings rows. `current` serves the held
/// snapshot; `refresh` re-fetches the full set (no delta application).
#[async_trait]
pub trait SettingsResolverTrait {
    async fn current(&self) -> RestaurantSettings;
    async fn refresh(&self) -> Result<RestaurantSettings, ServiceError>;
}
