use crate::{
    abstract_trait::{
        DynCartRepository, DynCartService, DynMenuItemQueryRepository, DynNotifier,
        DynOrderCommandRepository, DynOrderItemQueryRepository, DynOrderLifecycleService,
        DynOrderPlacementService, DynOrderQueryRepository, DynPaymentGateway, DynPaymentService,
        DynSettingsRepository, DynSettingsResolver,
    },
    notifier::TwilioNotifier,
    payment_gateway::RazorpayGateway,
    repository::{
        cart::CartRepository,
        menu_item::MenuItemQueryRepository,
        order::{OrderCommandRepository, OrderQueryRepository},
        order_item::OrderItemQueryRepository,
        settings::SettingsRepository,
    },
    service::{
        spawn_settings_watcher, CartService, OrderLifecycleService, OrderPlacementService,
        PaymentService, SettingsResolver,
    },
};
use shared::{config::Config, config::ConnectionPool, errors::ServiceError};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub cart_service: DynCartService,
    pub menu_item_repository: DynMenuItemQueryRepository,
    pub settings_resolver: DynSettingsResolver,
    pub order_placement_service: DynOrderPlacementService,
    pub order_lifecycle_service: DynOrderLifecycleService,
    pub payment_service: DynPaymentService,
}

impl DependenciesInject {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self, ServiceError> {
        let cart_repository: DynCartRepository = Arc::new(CartRepository::new(pool.clone()));
        let menu_item_repository: DynMenuItemQueryRepository =
            Arc::new(MenuItemQueryRepository::new(pool.clone()));
        let settings_repository: DynSettingsRepository =
            Arc::new(SettingsRepository::new(pool.clone()));
        let order_command_repository: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool.clone()));
        let order_query_repository: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_item_repository: DynOrderItemQueryRepository =
            Arc::new(OrderItemQueryRepository::new(pool.clone()));

        let settings_resolver: DynSettingsResolver =
            Arc::new(SettingsResolver::new(settings_repository).await?);
        spawn_settings_watcher(pool, Arc::clone(&settings_resolver));

        let gateway: DynPaymentGateway = Arc::new(RazorpayGateway::new(&config.payment)?);
        let notifier: DynNotifier = Arc::new(TwilioNotifier::new(&config.notify)?);

        let cart_service: DynCartService = Arc::new(CartService::new(
            Arc::clone(&cart_repository),
            Arc::clone(&menu_item_repository),
        ));

        let order_placement_service: DynOrderPlacementService =
            Arc::new(OrderPlacementService::new(
                cart_repository,
                Arc::clone(&menu_item_repository),
                Arc::clone(&order_command_repository),
                Arc::clone(&settings_resolver),
                Arc::clone(&notifier),
            ));

        let order_lifecycle_service: DynOrderLifecycleService =
            Arc::new(OrderLifecycleService::new(
                Arc::clone(&order_query_repository),
                order_item_repository,
                Arc::clone(&order_command_repository),
                notifier,
            ));

        let payment_service: DynPaymentService = Arc::new(PaymentService::new(
            order_query_repository,
            order_command_repository,
            gateway,
            config.payment.key_id.clone(),
        ));

        Ok(Self {
            cart_service,
            menu_item_repository,
            settings_resolver,
            order_placement_service,
            order_lifecycle_service,
            payment_service,
        })
    }
}
