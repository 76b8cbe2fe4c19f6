//! Error types for the analytics core.

use thiserror::Error;

use crate::models::MetricId;

/// Rows handed to the ranking engine did not all carry the expected metric.
/// Mixing metrics makes a ranking meaningless, so this is surfaced rather
/// than silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("comparison rows mix metrics: expected {expected}, found {found}")]
pub struct MetricMixError {
    pub expected: MetricId,
    pub found: MetricId,
}

/// Failures parsing dashboard query values into domain enums
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("unknown metric '{0}'")]
    UnknownMetric(String),
    #[error("unknown comparison type '{0}' (expected vehicle, driver or route)")]
    UnknownComparisonType(String),
    #[error("unknown severity '{0}' (expected low, medium, high or all)")]
    UnknownSeverity(String),
    #[error("unknown time range '{0}' (expected day, week, month or year)")]
    UnknownTimeRange(String),
}
