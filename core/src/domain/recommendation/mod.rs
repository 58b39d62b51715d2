pub mod entities;
pub mod filters;
pub mod ports;
pub mod prompt;
pub mod services;
pub mod validator;
pub mod value_objects;
