// Core domain layer
pub mod interfaces;
pub mod models;
pub mod resolver;
pub mod services;

pub use interfaces::*;
pub use models::*;
pub use resolver::*;
pub use services::*;
