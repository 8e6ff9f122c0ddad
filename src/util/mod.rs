pub mod jwt;
pub mod stripe;
pub mod money;
pub mod logger;
pub mod error;
