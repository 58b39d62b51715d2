pub mod admin;
pub mod category;
pub mod health;
pub mod menu_item;
pub mod recommendation;
pub mod restaurant;
pub mod server;
