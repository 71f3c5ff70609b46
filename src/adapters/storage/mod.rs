//! Storage adapters.

mod in_memory_advisor_repository;

pub use in_memory_advisor_repository::InMemoryAdvisorRepository;
