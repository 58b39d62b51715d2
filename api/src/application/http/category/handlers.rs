pub mod delete_category;
pub mod list_categories;
