//! HTTP transport adapters.

pub mod advisor;
