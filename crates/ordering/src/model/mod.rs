pub mod cart_item;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod settings;
