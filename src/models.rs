//! Core records shared between the generator, the ranking engine, and the API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalyticsError;

/// Identifier of a comparable fleet metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    FuelConsumption,
    OperationalCosts,
    Co2Emission,
    Efficiency,
    Utilization,
    MaintenanceCosts,
}

impl MetricId {
    pub const ALL: [MetricId; 6] = [
        MetricId::FuelConsumption,
        MetricId::OperationalCosts,
        MetricId::Co2Emission,
        MetricId::Efficiency,
        MetricId::Utilization,
        MetricId::MaintenanceCosts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::FuelConsumption => "fuel_consumption",
            MetricId::OperationalCosts => "operational_costs",
            MetricId::Co2Emission => "co2_emission",
            MetricId::Efficiency => "efficiency",
            MetricId::Utilization => "utilization",
            MetricId::MaintenanceCosts => "maintenance_costs",
        }
    }
}

impl FromStr for MetricId {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fuel_consumption" => Ok(MetricId::FuelConsumption),
            "operational_costs" => Ok(MetricId::OperationalCosts),
            "co2_emission" => Ok(MetricId::Co2Emission),
            "efficiency" => Ok(MetricId::Efficiency),
            "utilization" => Ok(MetricId::Utilization),
            "maintenance_costs" => Ok(MetricId::MaintenanceCosts),
            other => Err(AnalyticsError::UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a smaller or a larger value wins the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directionality {
    LowerBetter,
    HigherBetter,
}

/// Kind of subject being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonType {
    Vehicle,
    Driver,
    Route,
}

impl FromStr for ComparisonType {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vehicle" => Ok(ComparisonType::Vehicle),
            "driver" => Ok(ComparisonType::Driver),
            "route" => Ok(ComparisonType::Route),
            other => Err(AnalyticsError::UnknownComparisonType(other.to_string())),
        }
    }
}

impl fmt::Display for ComparisonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComparisonType::Vehicle => "vehicle",
            ComparisonType::Driver => "driver",
            ComparisonType::Route => "route",
        };
        f.write_str(s)
    }
}

/// Three-way health classification of a metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Good,
    Warning,
    Critical,
}

/// Reporting window selected in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
}

impl TimeRange {
    /// Number of trend points for this window
    pub fn bucket_count(&self) -> usize {
        match self {
            TimeRange::Day => 24,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Year => 12,
        }
    }
}

impl FromStr for TimeRange {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            other => Err(AnalyticsError::UnknownTimeRange(other.to_string())),
        }
    }
}

/// One subject in a comparison, with its sampled value for one metric.
/// Rank is assigned by the ranking engine; rows fresh from the generator
/// carry rank 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub entity_id: String,
    pub entity_name: String,
    pub metric: MetricId,
    pub value: f64,
    pub change_percent: f64,
    pub status: Status,
    pub rank: u32,
}

/// Headline statistics over one ranked comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub best: ComparisonRow,
    pub worst: ComparisonRow,
    pub mean: f64,
    pub median: f64,
}

/// One dashboard KPI tile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub trend: f64,
    pub trend_period: TimeRange,
    pub status: Status,
}

/// One labeled point of a trend line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub value: f64,
}

/// Trend line for one metric over the selected window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSeries {
    pub metric: MetricId,
    pub points: Vec<TrendPoint>,
}

/// Severity of a detected fuel anomaly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl FromStr for Severity {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(AnalyticsError::UnknownSeverity(other.to_string())),
        }
    }
}

/// Investigation state of an anomaly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyStatus {
    New,
    Investigating,
    Resolved,
}

/// Category of fuel-fraud anomaly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    ConsumptionSpike,
    UnusualRefueling,
    SuspectedTheft,
    InefficientRoute,
    DrivingStyle,
}

impl AnomalyKind {
    pub fn label(&self) -> &'static str {
        match self {
            AnomalyKind::ConsumptionSpike => "Sudden consumption spike",
            AnomalyKind::UnusualRefueling => "Unusual refueling pattern",
            AnomalyKind::SuspectedTheft => "Suspected fuel theft",
            AnomalyKind::InefficientRoute => "Inefficient route",
            AnomalyKind::DrivingStyle => "Harsh driving style",
        }
    }
}

/// One entry in the fraud-detection feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub id: String,
    pub date: String,
    pub kind: AnomalyKind,
    pub description: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub severity: Severity,
    pub potential_loss: f64,
    pub status: AnomalyStatus,
}

/// One page of the anomaly feed; `total` counts the post-filter set so
/// callers can derive page counts that match what they are browsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyPage {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<AnomalyRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_round_trip() {
        for metric in MetricId::ALL {
            assert_eq!(metric.as_str().parse::<MetricId>().unwrap(), metric);
        }
    }

    #[test]
    fn test_unknown_metric() {
        assert!("tire_pressure".parse::<MetricId>().is_err());
    }

    #[test]
    fn test_bucket_counts() {
        assert_eq!(TimeRange::Day.bucket_count(), 24);
        assert_eq!(TimeRange::Week.bucket_count(), 7);
        assert_eq!(TimeRange::Month.bucket_count(), 30);
        assert_eq!(TimeRange::Year.bucket_count(), 12);
    }

    #[test]
    fn test_severity_parsing() {
        assert_eq!("high".parse::<Severity>().unwrap(), Severity::High);
        assert!("urgent".parse::<Severity>().is_err());
    }
}
