use crate::{
    abstract_trait::{DynSettingsRepository, DynSettingsResolver, SettingsResolverTrait},
    model::settings::RestaurantSettings,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::ServiceError};
use sqlx::postgres::PgListener;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

pub const SETTINGS_CHANNEL: &str = "restaurant_settings_changed";

/// Holds the latest settings snapshot in memory so request handling never
/// touches the settings table. The watcher task swaps snapshots in whenever
/// the database announces a change.
pub struct SettingsResolver {
    repository: DynSettingsRepository,
    snapshot: RwLock<RestaurantSettings>,
}

impl SettingsResolver {
    pub async fn new(repository: DynSettingsRepository) -> Result<Self, ServiceError> {
        let rows = repository.fetch_all().await?;
        let initial = RestaurantSettings::from_rows(&rows);
        info!(
            "✅ Loaded restaurant settings ({} key(s), open {} - {})",
            initial.raw.len(),
            initial.open_time,
            initial.close_time
        );
        Ok(Self {
            repository,
            snapshot: RwLock::new(initial),
        })
    }
}

#[async_trait]
impl SettingsResolverTrait for SettingsResolver {
    async fn current(&self) -> RestaurantSettings {
        self.snapshot.read().await.clone()
    }

    async fn refresh(&self) -> Result<RestaurantSettings, ServiceError> {
        let rows = self.repository.fetch_all().await?;
        let settings = RestaurantSettings::from_rows(&rows);
        *self.snapshot.write().await = settings.clone();
        info!("🔄 Restaurant settings snapshot refreshed");
        Ok(settings)
    }
}

/// Subscribes to the settings NOTIFY channel and refreshes the resolver on
/// every notification. Reconnects after a short pause when the listener
/// connection drops, refreshing once on reconnect to cover missed events.
pub fn spawn_settings_watcher(db: ConnectionPool, resolver: DynSettingsResolver) {
    tokio::spawn(async move {
        loop {
            let mut listener = match PgListener::connect_with(&db).await {
                Ok(l) => l,
                Err(e) => {
                    error!("❌ Settings listener failed to connect: {e:?}");
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    continue;
                }
            };

            if let Err(e) = listener.listen(SETTINGS_CHANNEL).await {
                error!("❌ Failed to LISTEN on {SETTINGS_CHANNEL}: {e:?}");
                tokio::time::sleep(Duration::from_secs(5)).await;
                continue;
            }

            info!("👂 Watching {SETTINGS_CHANNEL} for settings changes");
            if let Err(e) = resolver.refresh().await {
                warn!("⚠️ Settings refresh on (re)connect failed: {e}");
            }

            loop {
                match listener.recv().await {
                    Ok(_) => {
                        if let Err(e) = resolver.refresh().await {
                            warn!("⚠️ Settings refresh after notify failed: {e}");
                        }
                    }
                    Err(e) => {
                        warn!("⚠️ Settings listener dropped: {e:?}; reconnecting");
                        break;
                    }
                }
            }

            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    });
}
