use crate::{abstract_trait::SettingsRepositoryTrait, model::settings::SettingRow};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct SettingsRepository {
    db: ConnectionPool,
}

impl SettingsRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    async fn fetch_all(&self) -> Result<Vec<SettingRow>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, SettingRow>(
            "SELECT setting_key, setting_value, updated_at FROM restaurant_settings",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch restaurant settings: {e:?}");
            RepositoryError::from(e)
        })
    }
}
