//! Foundation value objects shared across the domain.

mod ids;

pub use ids::AdvisorId;
