//! Fleet analytics backend: mock data services, comparative ranking and
//! summary statistics, and the fraud-detection anomaly feed behind a REST
//! API.

pub mod anomaly;
pub mod api;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod models;
pub mod ranking;
pub mod summary;
