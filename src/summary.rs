//! Summary aggregation over a ranked comparison.

use crate::models::{ComparisonRow, SummaryStats};

/// Headline statistics for an already-ranked row set: best and worst are
/// the first and last ranked rows (the ranking is direction-aware, so no
/// directionality logic is repeated here), mean and median are over raw
/// values. Returns `None` for an empty input.
pub fn summarize(ranked: &[ComparisonRow]) -> Option<SummaryStats> {
    let first = ranked.first()?;
    let last = ranked.last()?;

    let mean = ranked.iter().map(|r| r.value).sum::<f64>() / ranked.len() as f64;

    let mut values: Vec<f64> = ranked.iter().map(|r| r.value).collect();
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    let median = if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    };

    Some(SummaryStats {
        best: first.clone(),
        worst: last.clone(),
        mean,
        median,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::metric;
    use crate::models::{MetricId, Status};
    use crate::ranking::rank;

    fn rows(values: &[f64]) -> Vec<ComparisonRow> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ComparisonRow {
                entity_id: format!("v{}", i + 1),
                entity_name: format!("Vehicle {}", i + 1),
                metric: MetricId::FuelConsumption,
                value: *v,
                change_percent: 0.0,
                status: Status::Good,
                rank: 0,
            })
            .collect()
    }

    #[test]
    fn test_median_odd() {
        let ranked = rank(&rows(&[9.0, 4.0, 7.0]), metric(MetricId::FuelConsumption)).unwrap();
        let summary = summarize(&ranked).unwrap();
        assert_eq!(summary.median, 7.0);
    }

    #[test]
    fn test_median_even() {
        let ranked =
            rank(&rows(&[12.0, 4.0, 9.0, 7.0]), metric(MetricId::FuelConsumption)).unwrap();
        let summary = summarize(&ranked).unwrap();
        assert_eq!(summary.median, 8.0);
    }

    #[test]
    fn test_mean() {
        let ranked = rank(&rows(&[6.0, 8.0, 10.0]), metric(MetricId::FuelConsumption)).unwrap();
        let summary = summarize(&ranked).unwrap();
        assert!((summary.mean - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_best_and_worst_follow_rank() {
        let ranked = rank(&rows(&[9.5, 6.2, 8.1]), metric(MetricId::FuelConsumption)).unwrap();
        let summary = summarize(&ranked).unwrap();
        assert_eq!(summary.best.rank, 1);
        assert_eq!(summary.best.value, 6.2);
        assert_eq!(summary.worst.rank, ranked.len() as u32);
        assert_eq!(summary.worst.value, 9.5);
    }

    #[test]
    fn test_empty_input() {
        assert!(summarize(&[]).is_none());
    }
}
