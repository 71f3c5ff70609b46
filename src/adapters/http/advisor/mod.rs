//! Advisor HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AdvisorHandlers;
pub use routes::advisor_routes;
