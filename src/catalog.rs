//! Static metric and entity catalogs.
//! Defined once at startup; everything downstream looks values up here.

use serde::Serialize;

use crate::models::{ComparisonType, Directionality, MetricId, Status};

/// Two cutoffs partitioning a metric's value range into good/warning/critical.
/// Which side of a cutoff counts as good depends on the metric's
/// directionality, so classification lives on [`MetricDefinition`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusThresholds {
    pub good: f64,
    pub warning: f64,
}

/// Everything the dashboard knows about one measurable quantity
#[derive(Debug, Clone, Serialize)]
pub struct MetricDefinition {
    pub id: MetricId,
    pub name: &'static str,
    pub unit: &'static str,
    pub color: &'static str,
    pub directionality: Directionality,
    pub thresholds: StatusThresholds,
    /// Plausible value interval for mock samples
    pub sample_range: (f64, f64),
    /// Values are rendered as whole units (costs, emissions)
    pub integer_valued: bool,
}

impl MetricDefinition {
    /// Classify a value against this metric's thresholds. Pure: the same
    /// value always yields the same status.
    pub fn classify(&self, value: f64) -> Status {
        match self.directionality {
            Directionality::LowerBetter => {
                if value < self.thresholds.good {
                    Status::Good
                } else if value < self.thresholds.warning {
                    Status::Warning
                } else {
                    Status::Critical
                }
            }
            Directionality::HigherBetter => {
                if value > self.thresholds.good {
                    Status::Good
                } else if value > self.thresholds.warning {
                    Status::Warning
                } else {
                    Status::Critical
                }
            }
        }
    }
}

/// The full metric catalog, in display order
pub static METRICS: [MetricDefinition; 6] = [
    MetricDefinition {
        id: MetricId::FuelConsumption,
        name: "Fuel consumption",
        unit: "l/100km",
        color: "#3f51b5",
        directionality: Directionality::LowerBetter,
        thresholds: StatusThresholds { good: 8.0, warning: 10.0 },
        sample_range: (6.0, 11.0),
        integer_valued: false,
    },
    MetricDefinition {
        id: MetricId::OperationalCosts,
        name: "Operational costs",
        unit: "PLN",
        color: "#303f9f",
        directionality: Directionality::LowerBetter,
        thresholds: StatusThresholds { good: 10000.0, warning: 11000.0 },
        sample_range: (8000.0, 12000.0),
        integer_valued: true,
    },
    MetricDefinition {
        id: MetricId::Co2Emission,
        name: "CO2 emission",
        unit: "kg",
        color: "#4caf50",
        directionality: Directionality::LowerBetter,
        thresholds: StatusThresholds { good: 2000.0, warning: 2300.0 },
        sample_range: (1500.0, 2500.0),
        integer_valued: true,
    },
    MetricDefinition {
        id: MetricId::Efficiency,
        name: "Efficiency",
        unit: "%",
        color: "#ff9800",
        directionality: Directionality::HigherBetter,
        thresholds: StatusThresholds { good: 85.0, warning: 75.0 },
        sample_range: (70.0, 90.0),
        integer_valued: false,
    },
    MetricDefinition {
        id: MetricId::Utilization,
        name: "Vehicle utilization",
        unit: "%",
        color: "#ffc107",
        directionality: Directionality::HigherBetter,
        thresholds: StatusThresholds { good: 80.0, warning: 70.0 },
        sample_range: (60.0, 90.0),
        integer_valued: false,
    },
    MetricDefinition {
        id: MetricId::MaintenanceCosts,
        name: "Maintenance costs",
        unit: "PLN",
        color: "#f44336",
        directionality: Directionality::LowerBetter,
        thresholds: StatusThresholds { good: 1500.0, warning: 2500.0 },
        sample_range: (1000.0, 3000.0),
        integer_valued: true,
    },
];

/// Look up a metric definition by id
pub fn metric(id: MetricId) -> &'static MetricDefinition {
    METRICS
        .iter()
        .find(|m| m.id == id)
        .expect("every MetricId has a catalog entry")
}

/// One comparable subject (vehicle, driver or route)
#[derive(Debug, Clone, Serialize)]
pub struct EntityRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub comparison_type: ComparisonType,
}

static VEHICLES: [(&str, &str); 10] = [
    ("v1", "Mercedes Actros"),
    ("v2", "Volvo FH"),
    ("v3", "Scania R"),
    ("v4", "MAN TGX"),
    ("v5", "DAF XF"),
    ("v6", "Renault T"),
    ("v7", "Iveco Stralis"),
    ("v8", "Mercedes Atego"),
    ("v9", "Volvo FM"),
    ("v10", "Scania S"),
];

static DRIVERS: [(&str, &str); 10] = [
    ("d1", "Jan Kowalski"),
    ("d2", "Anna Nowak"),
    ("d3", "Piotr Wisniewski"),
    ("d4", "Katarzyna Dabrowska"),
    ("d5", "Tomasz Lewandowski"),
    ("d6", "Malgorzata Wojcik"),
    ("d7", "Michal Kaminski"),
    ("d8", "Agnieszka Kowalczyk"),
    ("d9", "Krzysztof Zielinski"),
    ("d10", "Monika Szymanska"),
];

static ROUTES: [(&str, &str); 10] = [
    ("r1", "Warszawa - Krakow"),
    ("r2", "Warszawa - Gdansk"),
    ("r3", "Warszawa - Poznan"),
    ("r4", "Warszawa - Wroclaw"),
    ("r5", "Krakow - Gdansk"),
    ("r6", "Krakow - Poznan"),
    ("r7", "Krakow - Wroclaw"),
    ("r8", "Gdansk - Poznan"),
    ("r9", "Gdansk - Wroclaw"),
    ("r10", "Poznan - Wroclaw"),
];

/// Entity catalog for one comparison type, in catalog order
pub fn entities(comparison_type: ComparisonType) -> Vec<EntityRecord> {
    let table: &[(&str, &str)] = match comparison_type {
        ComparisonType::Vehicle => &VEHICLES,
        ComparisonType::Driver => &DRIVERS,
        ComparisonType::Route => &ROUTES,
    };
    table
        .iter()
        .map(|&(id, name)| EntityRecord {
            id,
            name,
            comparison_type,
        })
        .collect()
}

/// Vehicle registration ids used by the fraud-detection feed
pub static FLEET_VEHICLE_IDS: [&str; 8] = [
    "VEH001", "VEH002", "VEH003", "VEH004", "VEH005", "VEH006", "VEH007", "VEH008",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_metric_has_definition() {
        for id in MetricId::ALL {
            assert_eq!(metric(id).id, id);
        }
    }

    #[test]
    fn test_lower_better_classification() {
        let fuel = metric(MetricId::FuelConsumption);
        assert_eq!(fuel.classify(6.5), Status::Good);
        assert_eq!(fuel.classify(9.0), Status::Warning);
        assert_eq!(fuel.classify(10.5), Status::Critical);
    }

    #[test]
    fn test_higher_better_classification() {
        let eff = metric(MetricId::Efficiency);
        assert_eq!(eff.classify(88.0), Status::Good);
        assert_eq!(eff.classify(80.0), Status::Warning);
        assert_eq!(eff.classify(72.0), Status::Critical);
    }

    #[test]
    fn test_thresholds_inside_sample_range() {
        for def in &METRICS {
            let (lo, hi) = def.sample_range;
            assert!(lo < hi, "{} has an empty sample range", def.name);
            assert!(def.thresholds.good >= lo && def.thresholds.good <= hi);
        }
    }

    #[test]
    fn test_entity_catalogs() {
        for ct in [
            ComparisonType::Vehicle,
            ComparisonType::Driver,
            ComparisonType::Route,
        ] {
            let list = entities(ct);
            assert_eq!(list.len(), 10);
            assert!(list.iter().all(|e| e.comparison_type == ct));
        }
    }
}
