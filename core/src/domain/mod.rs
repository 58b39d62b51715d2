pub mod admin;
pub mod category;
pub mod common;
pub mod crypto;
pub mod health;
pub mod jwt;
pub mod media;
pub mod menu_item;
pub mod recommendation;
pub mod restaurant;
