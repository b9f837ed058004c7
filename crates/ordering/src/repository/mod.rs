pub mod cart;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod settings;
