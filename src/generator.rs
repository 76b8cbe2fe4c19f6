//! Mock data source for the dashboard.
//!
//! Stands in for the telematics backend: produces comparison rows, KPI
//! snapshots, trend series and the fraud-detection feed with controlled
//! random variation. Values are drawn from per-metric plausible ranges and
//! classified against the same threshold table the rest of the system uses,
//! so the randomized data stays internally consistent. Pass a seeded
//! `StdRng` for reproducible output.

use chrono::{Duration, Local};
use rand::Rng;

use crate::catalog::{self, MetricDefinition, FLEET_VEHICLE_IDS};
use crate::models::{
    AnomalyKind, AnomalyRecord, AnomalyStatus, ComparisonRow, ComparisonType, KpiSnapshot,
    MetricId, Severity, Status, TimeRange, TrendPoint, TrendSeries,
};

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn sample_value<R: Rng>(rng: &mut R, metric: &MetricDefinition) -> f64 {
    let (lo, hi) = metric.sample_range;
    let value = rng.gen_range(lo..hi);
    if metric.integer_valued {
        value.floor()
    } else {
        round1(value)
    }
}

/// One row per catalog entity for the given comparison type, with a value
/// sampled from the metric's plausible range and a threshold-derived status.
/// Rows come back in catalog order with rank 0; the ranking engine assigns
/// ranks.
pub fn generate_comparison<R: Rng>(
    rng: &mut R,
    comparison_type: ComparisonType,
    metric: &MetricDefinition,
) -> Vec<ComparisonRow> {
    catalog::entities(comparison_type)
        .into_iter()
        .map(|entity| {
            let value = sample_value(rng, metric);
            ComparisonRow {
                entity_id: entity.id.to_string(),
                entity_name: entity.name.to_string(),
                metric: metric.id,
                value,
                change_percent: round1(rng.gen_range(-5.0..5.0)),
                status: metric.classify(value),
                rank: 0,
            }
        })
        .collect()
}

/// Status of a KPI tile from its period-over-period trend
fn status_from_trend(trend: f64, higher_is_better: bool) -> Status {
    if higher_is_better {
        if trend > 2.0 {
            Status::Good
        } else if trend > 0.0 {
            Status::Warning
        } else {
            Status::Critical
        }
    } else if trend < -2.0 {
        Status::Good
    } else if trend < 0.0 {
        Status::Warning
    } else {
        Status::Critical
    }
}

struct KpiDef {
    id: &'static str,
    name: &'static str,
    base: f64,
    spread: f64,
    unit: &'static str,
    higher_is_better: bool,
    integer_valued: bool,
}

static KPI_DEFS: [KpiDef; 8] = [
    KpiDef {
        id: "active-vehicles",
        name: "Active vehicles",
        base: 42.0,
        spread: 3.0,
        unit: "pcs",
        higher_is_better: true,
        integer_valued: true,
    },
    KpiDef {
        id: "fuel-consumption",
        name: "Average fuel consumption",
        base: 8.5,
        spread: 0.8,
        unit: "l/100km",
        higher_is_better: false,
        integer_valued: false,
    },
    KpiDef {
        id: "operational-costs",
        name: "Operational costs",
        base: 12500.0,
        spread: 1500.0,
        unit: "PLN",
        higher_is_better: false,
        integer_valued: true,
    },
    KpiDef {
        id: "potential-savings",
        name: "Potential savings",
        base: 1800.0,
        spread: 400.0,
        unit: "PLN",
        higher_is_better: true,
        integer_valued: true,
    },
    KpiDef {
        id: "safety-index",
        name: "Safety index",
        base: 85.0,
        spread: 6.0,
        unit: "%",
        higher_is_better: true,
        integer_valued: false,
    },
    KpiDef {
        id: "co2-emission",
        name: "CO2 emission",
        base: 2150.0,
        spread: 250.0,
        unit: "kg",
        higher_is_better: false,
        integer_valued: true,
    },
    KpiDef {
        id: "maintenance-forecast",
        name: "Maintenance forecast",
        base: 4.0,
        spread: 2.0,
        unit: "pcs",
        higher_is_better: false,
        integer_valued: true,
    },
    KpiDef {
        id: "driver-performance",
        name: "Driver performance",
        base: 82.0,
        spread: 5.0,
        unit: "%",
        higher_is_better: true,
        integer_valued: false,
    },
];

/// The eight dashboard KPI tiles, jittered around their nominal values
pub fn generate_kpis<R: Rng>(rng: &mut R, time_range: TimeRange) -> Vec<KpiSnapshot> {
    KPI_DEFS
        .iter()
        .map(|def| {
            let raw = def.base + rng.gen_range(-def.spread..def.spread);
            let value = if def.integer_valued {
                raw.round().max(0.0)
            } else {
                round1(raw)
            };
            let trend = round1(rng.gen_range(-6.0..6.0));
            KpiSnapshot {
                id: def.id.to_string(),
                name: def.name.to_string(),
                value,
                unit: def.unit.to_string(),
                trend,
                trend_period: time_range,
                status: status_from_trend(trend, def.higher_is_better),
            }
        })
        .collect()
}

/// Bucket labels for a time range, oldest first, ending at "now"
pub fn trend_labels(time_range: TimeRange) -> Vec<String> {
    let now = Local::now();
    let count = time_range.bucket_count() as i64;
    let (step, format) = match time_range {
        TimeRange::Day => (Duration::hours(1), "%H:00"),
        TimeRange::Week | TimeRange::Month => (Duration::days(1), "%d.%m"),
        TimeRange::Year => (Duration::days(30), "%m.%Y"),
    };

    (0..count)
        .rev()
        .map(|i| (now - step * i as i32).format(format).to_string())
        .collect()
}

/// One trend line per requested metric, one point per time-range bucket
pub fn generate_trend<R: Rng>(
    rng: &mut R,
    time_range: TimeRange,
    metrics: &[MetricId],
) -> Vec<TrendSeries> {
    let labels = trend_labels(time_range);
    metrics
        .iter()
        .map(|&id| {
            let def = catalog::metric(id);
            let points = labels
                .iter()
                .map(|label| TrendPoint {
                    date: label.clone(),
                    value: sample_value(rng, def),
                })
                .collect();
            TrendSeries { metric: id, points }
        })
        .collect()
}

static ANOMALY_KINDS: [AnomalyKind; 5] = [
    AnomalyKind::ConsumptionSpike,
    AnomalyKind::UnusualRefueling,
    AnomalyKind::SuspectedTheft,
    AnomalyKind::InefficientRoute,
    AnomalyKind::DrivingStyle,
];

static SEVERITIES: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

static ANOMALY_STATUSES: [AnomalyStatus; 3] = [
    AnomalyStatus::New,
    AnomalyStatus::Investigating,
    AnomalyStatus::Resolved,
];

fn describe<R: Rng>(rng: &mut R, kind: AnomalyKind) -> String {
    match kind {
        AnomalyKind::ConsumptionSpike => format!(
            "Fuel consumption up {}% against the fleet average.",
            rng.gen_range(10..40)
        ),
        AnomalyKind::UnusualRefueling => format!(
            "Refueling of {}L outside the regular schedule.",
            rng.gen_range(20..70)
        ),
        AnomalyKind::SuspectedTheft => format!(
            "Fuel level {}L below the predicted amount.",
            rng.gen_range(20..60)
        ),
        AnomalyKind::InefficientRoute => format!(
            "Route {}% longer than the optimal one.",
            rng.gen_range(10..40)
        ),
        AnomalyKind::DrivingStyle => format!(
            "Hard acceleration and braking raising fuel use by {}%.",
            rng.gen_range(5..25)
        ),
    }
}

/// How many anomaly records one generation pass produces
pub const ANOMALY_FEED_SIZE: usize = 25;

/// The fraud-detection feed: 25 records dated within the last 30 days,
/// spread over the fleet's vehicles and drivers
pub fn generate_anomalies<R: Rng>(rng: &mut R) -> Vec<AnomalyRecord> {
    let drivers = catalog::entities(ComparisonType::Driver);

    (0..ANOMALY_FEED_SIZE)
        .map(|i| {
            let date = Local::now() - Duration::days(rng.gen_range(0..30));
            let kind = ANOMALY_KINDS[rng.gen_range(0..ANOMALY_KINDS.len())];
            let description = describe(rng, kind);
            AnomalyRecord {
                id: format!("ANO{:03}", i + 1),
                date: date.format("%d.%m.%Y").to_string(),
                kind,
                description,
                vehicle_id: FLEET_VEHICLE_IDS[rng.gen_range(0..FLEET_VEHICLE_IDS.len())]
                    .to_string(),
                driver_id: drivers[rng.gen_range(0..drivers.len())].name.to_string(),
                severity: SEVERITIES[rng.gen_range(0..SEVERITIES.len())],
                potential_loss: rng.gen_range(100..1100) as f64,
                status: ANOMALY_STATUSES[rng.gen_range(0..ANOMALY_STATUSES.len())],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_one_row_per_entity() {
        let mut rng = StdRng::seed_from_u64(1);
        let fuel = catalog::metric(MetricId::FuelConsumption);
        let rows = generate_comparison(&mut rng, ComparisonType::Vehicle, fuel);
        assert_eq!(rows.len(), 10);
        let catalog_ids: Vec<String> = catalog::entities(ComparisonType::Vehicle)
            .iter()
            .map(|e| e.id.to_string())
            .collect();
        let row_ids: Vec<String> = rows.iter().map(|r| r.entity_id.clone()).collect();
        assert_eq!(row_ids, catalog_ids);
    }

    #[test]
    fn test_values_in_range_and_status_consistent() {
        let mut rng = StdRng::seed_from_u64(2);
        for id in MetricId::ALL {
            let def = catalog::metric(id);
            let rows = generate_comparison(&mut rng, ComparisonType::Driver, def);
            for row in rows {
                let (lo, hi) = def.sample_range;
                assert!(row.value >= lo - 1.0 && row.value <= hi, "{}", def.name);
                assert_eq!(row.status, def.classify(row.value));
                assert!(row.change_percent >= -5.0 && row.change_percent <= 5.0);
            }
        }
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let fuel = catalog::metric(MetricId::FuelConsumption);
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let rows_a = generate_comparison(&mut a, ComparisonType::Route, fuel);
        let rows_b = generate_comparison(&mut b, ComparisonType::Route, fuel);
        for (x, y) in rows_a.iter().zip(rows_b.iter()) {
            assert_eq!(x.value, y.value);
            assert_eq!(x.change_percent, y.change_percent);
        }
    }

    #[test]
    fn test_kpi_tiles() {
        let mut rng = StdRng::seed_from_u64(3);
        let kpis = generate_kpis(&mut rng, TimeRange::Month);
        assert_eq!(kpis.len(), 8);
        assert_eq!(kpis[0].id, "active-vehicles");
        for kpi in &kpis {
            assert_eq!(kpi.trend_period, TimeRange::Month);
            assert!(kpi.value >= 0.0);
        }
    }

    #[test]
    fn test_trend_point_counts() {
        let mut rng = StdRng::seed_from_u64(4);
        for tr in [TimeRange::Day, TimeRange::Week, TimeRange::Month, TimeRange::Year] {
            let series = generate_trend(&mut rng, tr, &[MetricId::FuelConsumption]);
            assert_eq!(series.len(), 1);
            assert_eq!(series[0].points.len(), tr.bucket_count());
        }
    }

    #[test]
    fn test_anomaly_feed_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let feed = generate_anomalies(&mut rng);
        assert_eq!(feed.len(), ANOMALY_FEED_SIZE);
        assert_eq!(feed[0].id, "ANO001");
        assert_eq!(feed[24].id, "ANO025");
        for record in &feed {
            assert!(record.potential_loss >= 100.0 && record.potential_loss < 1100.0);
            assert!(FLEET_VEHICLE_IDS.contains(&record.vehicle_id.as_str()));
            assert!(!record.description.is_empty());
        }
    }
}
