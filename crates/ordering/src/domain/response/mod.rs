pub mod api;
pub mod cart;
pub mod menu;
pub mod order;
pub mod payment;
pub mod settings;
