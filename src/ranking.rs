//! Ranking engine: orders comparison rows by a metric's directionality and
//! assigns dense ranks 1..N.

use crate::catalog::MetricDefinition;
use crate::error::MetricMixError;
use crate::models::{ComparisonRow, Directionality};

/// Sort `rows` by value (ascending when lower is better, descending when
/// higher is better) and assign ranks 1..N in output order. The sort is
/// stable, so ties keep their catalog order. Returns a fresh vector; the
/// input is left untouched.
///
/// All rows must carry the metric being ranked; a stray row from another
/// metric fails the call rather than producing a meaningless ordering.
pub fn rank(
    rows: &[ComparisonRow],
    metric: &MetricDefinition,
) -> Result<Vec<ComparisonRow>, MetricMixError> {
    if let Some(stray) = rows.iter().find(|r| r.metric != metric.id) {
        return Err(MetricMixError {
            expected: metric.id,
            found: stray.metric,
        });
    }

    let mut ranked = rows.to_vec();
    match metric.directionality {
        Directionality::LowerBetter => {
            ranked.sort_by(|a, b| a.value.total_cmp(&b.value));
        }
        Directionality::HigherBetter => {
            ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
        }
    }
    for (i, row) in ranked.iter_mut().enumerate() {
        row.rank = (i + 1) as u32;
    }
    Ok(ranked)
}
