pub mod create_item;
pub mod delete_item;
pub mod update_item;
