mod cart;
mod menu_item;
mod notifier;
mod order;
mod payment;
mod settings;

pub use self::cart::{CartRepositoryTrait, CartServiceTrait, DynCartRepository, DynCartService};
pub use self::menu_item::{DynMenuItemQueryRepository, MenuItemQueryRepositoryTrait};
pub use self::notifier::{DynNotifier, NewOrderNotification, NotifierTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderItemQueryRepository, DynOrderLifecycleService,
    DynOrderPlacementService, DynOrderQueryRepository, OrderCommandRepositoryTrait,
    OrderItemQueryRepositoryTrait, OrderLifecycleServiceTrait, OrderPlacementServiceTrait,
    OrderQueryRepositoryTrait,
};
pub use self::payment::{
    DynPaymentGateway, DynPaymentService, GatewayOrder, PaymentGatewayTrait, PaymentServiceTrait,
};
pub use self::settings::{
    DynSettingsRepository, DynSettingsResolver, SettingsRepositoryTrait, SettingsResolverTrait,
};
