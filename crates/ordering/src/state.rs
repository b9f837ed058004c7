use crate::di::DependenciesInject;
use shared::{
    abstract_trait::DynJwtService,
    config::{Config, ConnectionPool, JwtConfig},
    errors::ServiceError,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_service: DynJwtService,
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self, ServiceError> {
        let jwt_service: DynJwtService = Arc::new(JwtConfig::new(&config.jwt_secret));
        let di_container = DependenciesInject::new(pool, config).await?;

        Ok(Self {
            di_container,
            jwt_service,
        })
    }
}
