pub mod user_router;
pub mod banner_router;
pub mod test_router;
pub mod appointment_router;
pub mod payment_router;
pub mod catalog_router;
