//! Advisor Registry - advisor record management service
//!
//! This crate implements a registry of advisor records behind a
//! command/query dispatch pipeline: typed requests are validated in
//! aggregate before any handler runs, and read-path projections mask
//! PII before it leaves the core.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
