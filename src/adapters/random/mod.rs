//! Randomness adapters.

mod thread_rng_scorer;

pub use thread_rng_scorer::ThreadRngScorer;
