pub mod handlers;
pub mod response;
pub mod router;
pub mod validators;
