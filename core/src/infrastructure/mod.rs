pub mod admin;
pub mod category;
pub mod crypto;
pub mod db;
pub mod health;
pub mod jwt;
pub mod llm;
pub mod media;
pub mod menu_item;
pub mod object_storage;
pub mod restaurant;
