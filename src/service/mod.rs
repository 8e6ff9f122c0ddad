pub mod user_service;
pub mod banner_service;
pub mod test_service;
pub mod appointment_service;
pub mod payment_service;
pub mod catalog_service;
