//! API module for the fleet analytics dashboard.
//!
//! Provides the REST interface over the mock statistics services.

pub mod handlers;
pub mod service;

pub use service::StatisticsService;
