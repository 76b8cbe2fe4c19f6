//! Shared service layer for the analytics API.
//!
//! Wraps the mock generator, the ranking engine, the summary aggregator and
//! the anomaly pager behind one async facade used by the REST handlers and
//! the demo binaries. The service is stateless across requests: every call
//! regenerates its data, which is how the dashboard behaves when filters
//! change. The only shared mutable piece is the RNG.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::anomaly;
use crate::catalog::{self, EntityRecord, MetricDefinition};
use crate::generator;
use crate::models::{
    AnomalyPage, ComparisonRow, ComparisonType, KpiSnapshot, MetricId, Severity, SummaryStats,
    TimeRange, TrendSeries,
};
use crate::ranking;
use crate::summary;

/// Ranked comparison rows plus their headline statistics.
/// `summary` is `None` when there are no rows (an empty result, not an error).
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub rows: Vec<ComparisonRow>,
    pub summary: Option<SummaryStats>,
}

pub struct StatisticsService {
    rng: Mutex<StdRng>,
    /// Simulated backend latency, so consuming views exercise their
    /// loading states the way the production dashboard does
    mock_delay: Option<Duration>,
}

impl StatisticsService {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
            mock_delay: None,
        }
    }

    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = Some(delay);
        self
    }

    async fn simulate_latency(&self) {
        if let Some(delay) = self.mock_delay {
            tokio::time::sleep(delay).await;
        }
    }

    /// The full metric catalog
    pub fn metrics(&self) -> &'static [MetricDefinition] {
        &catalog::METRICS
    }

    /// Entity catalog for one comparison type
    pub fn entities(&self, comparison_type: ComparisonType) -> Vec<EntityRecord> {
        catalog::entities(comparison_type)
    }

    /// KPI tiles for the dashboard header
    pub async fn get_kpis(&self, time_range: TimeRange) -> Result<Vec<KpiSnapshot>> {
        self.simulate_latency().await;
        let mut rng = self.rng.lock().await;
        Ok(generator::generate_kpis(&mut *rng, time_range))
    }

    /// Trend lines for the requested metrics over the selected window
    pub async fn get_trends(
        &self,
        time_range: TimeRange,
        metrics: &[MetricId],
    ) -> Result<Vec<TrendSeries>> {
        self.simulate_latency().await;
        let mut rng = self.rng.lock().await;
        Ok(generator::generate_trend(&mut *rng, time_range, metrics))
    }

    /// Ranked comparison for one (comparison type, metric) selection.
    /// `time_range` labels the window the samples notionally cover; the
    /// mock source draws from the same ranges regardless.
    pub async fn get_comparison(
        &self,
        comparison_type: ComparisonType,
        metric_id: MetricId,
        _time_range: TimeRange,
    ) -> Result<ComparisonResult> {
        self.simulate_latency().await;
        let metric = catalog::metric(metric_id);
        let raw = {
            let mut rng = self.rng.lock().await;
            generator::generate_comparison(&mut *rng, comparison_type, metric)
        };
        // The generator emits a single metric, so a mix failure here is a bug
        let rows = ranking::rank(&raw, metric)?;
        let summary = summary::summarize(&rows);
        tracing::debug!(
            comparison_type = %comparison_type,
            metric = %metric_id,
            rows = rows.len(),
            "comparison generated"
        );
        Ok(ComparisonResult { rows, summary })
    }

    /// One page of the fraud-detection feed, severity-filtered
    pub async fn get_anomalies(
        &self,
        severity: Option<Severity>,
        page: usize,
        limit: usize,
    ) -> Result<AnomalyPage> {
        self.simulate_latency().await;
        let feed = {
            let mut rng = self.rng.lock().await;
            generator::generate_anomalies(&mut *rng)
        };
        Ok(anomaly::paginate(&feed, severity, page, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_comparison_is_ranked_with_summary() {
        let service = StatisticsService::new(Some(11));
        let result = service
            .get_comparison(
                ComparisonType::Vehicle,
                MetricId::FuelConsumption,
                TimeRange::Month,
            )
            .await
            .unwrap();
        assert_eq!(result.rows.len(), 10);
        assert_eq!(result.rows[0].rank, 1);
        let summary = result.summary.unwrap();
        assert_eq!(summary.best.entity_id, result.rows[0].entity_id);
        assert_eq!(summary.worst.entity_id, result.rows[9].entity_id);
    }

    #[tokio::test]
    async fn test_seeded_service_reproduces() {
        let a = StatisticsService::new(Some(99));
        let b = StatisticsService::new(Some(99));
        let ra = a
            .get_comparison(ComparisonType::Driver, MetricId::Efficiency, TimeRange::Week)
            .await
            .unwrap();
        let rb = b
            .get_comparison(ComparisonType::Driver, MetricId::Efficiency, TimeRange::Week)
            .await
            .unwrap();
        for (x, y) in ra.rows.iter().zip(rb.rows.iter()) {
            assert_eq!(x.entity_id, y.entity_id);
            assert_eq!(x.value, y.value);
        }
    }

    #[tokio::test]
    async fn test_anomaly_page_limits() {
        let service = StatisticsService::new(Some(5));
        let page = service.get_anomalies(None, 1, 10).await.unwrap();
        assert_eq!(page.total, generator::ANOMALY_FEED_SIZE);
        assert_eq!(page.data.len(), 10);
        let high = service
            .get_anomalies(Some(Severity::High), 1, 100)
            .await
            .unwrap();
        assert!(high.data.iter().all(|r| r.severity == Severity::High));
        assert_eq!(high.total, high.data.len());
    }

    #[tokio::test]
    async fn test_kpis_and_trends() {
        let service = StatisticsService::new(Some(3));
        let kpis = service.get_kpis(TimeRange::Week).await.unwrap();
        assert_eq!(kpis.len(), 8);
        let trends = service
            .get_trends(
                TimeRange::Week,
                &[MetricId::FuelConsumption, MetricId::Co2Emission],
            )
            .await
            .unwrap();
        assert_eq!(trends.len(), 2);
        assert!(trends.iter().all(|s| s.points.len() == 7));
    }
}
