pub mod fallback;
pub mod local;
