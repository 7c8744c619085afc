pub mod auth_service;
pub mod telemetry;

pub use auth_service::AuthService;
pub use telemetry::init_tracing;
