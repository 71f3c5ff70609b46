//! Health score source port.
//!
//! The classification drawn at creation is the one impure input of the
//! pipeline; hiding it behind a port lets tests inject a fixed score.

/// Source of health scores.
pub trait HealthScorer: Send + Sync {
    /// Draws a score uniformly distributed in [1, 100].
    fn draw(&self) -> u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_scorer_is_object_safe() {
        fn _accepts_dyn(_scorer: &dyn HealthScorer) {}
    }
}
