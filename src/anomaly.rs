//! Severity filtering and pagination of the anomaly feed.

use crate::models::{AnomalyPage, AnomalyRecord, Severity};

/// Filter by severity (None keeps everything) and slice out one page.
/// The filter runs before pagination, and `total` counts the filtered set,
/// so a caller's `ceil(total / limit)` page math matches what it browses.
/// The page window is clipped to the available length; pages past the end
/// come back empty. Page numbers below 1 are treated as page 1.
pub fn paginate(
    records: &[AnomalyRecord],
    severity: Option<Severity>,
    page: usize,
    limit: usize,
) -> AnomalyPage {
    let filtered: Vec<&AnomalyRecord> = records
        .iter()
        .filter(|r| severity.map_or(true, |s| r.severity == s))
        .collect();

    let total = filtered.len();
    let page = page.max(1);
    let start = (page - 1).saturating_mul(limit).min(total);
    let end = start.saturating_add(limit).min(total);

    AnomalyPage {
        total,
        page,
        limit,
        data: filtered[start..end].iter().map(|r| (*r).clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnomalyKind, AnomalyStatus};

    fn record(i: usize, severity: Severity) -> AnomalyRecord {
        AnomalyRecord {
            id: format!("ANO{:03}", i),
            date: "15.08.2026".to_string(),
            kind: AnomalyKind::SuspectedTheft,
            description: "Fuel level 30L below the predicted amount.".to_string(),
            vehicle_id: "VEH001".to_string(),
            driver_id: "Jan Kowalski".to_string(),
            severity,
            potential_loss: 450.0,
            status: AnomalyStatus::New,
        }
    }

    /// 15 high + 10 low, interleaved so filtering has to work
    fn mixed_feed() -> Vec<AnomalyRecord> {
        let mut records = Vec::new();
        for i in 1..=15 {
            records.push(record(i, Severity::High));
            if i <= 10 {
                records.push(record(100 + i, Severity::Low));
            }
        }
        records
    }

    #[test]
    fn test_filter_before_pagination() {
        let feed = mixed_feed();
        let page = paginate(&feed, Some(Severity::High), 2, 10);
        assert_eq!(page.total, 15);
        assert_eq!(page.data.len(), 5);
        assert!(page.data.iter().all(|r| r.severity == Severity::High));
        // Second page starts at filtered index 10
        assert_eq!(page.data[0].id, "ANO011");
        assert_eq!(page.data[4].id, "ANO015");
    }

    #[test]
    fn test_all_round_trip() {
        let feed = mixed_feed();
        let total = feed.len();
        let page = paginate(&feed, None, 1, total);
        assert_eq!(page.total, total);
        assert_eq!(page.data.len(), total);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let feed = mixed_feed();
        let page = paginate(&feed, Some(Severity::High), 4, 10);
        assert_eq!(page.total, 15);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_page_zero_treated_as_first() {
        let feed = mixed_feed();
        let page = paginate(&feed, Some(Severity::Low), 0, 4);
        assert_eq!(page.page, 1);
        assert_eq!(page.data.len(), 4);
        assert_eq!(page.data[0].id, "ANO101");
    }

    #[test]
    fn test_no_matching_severity() {
        let feed: Vec<AnomalyRecord> = (1..=5).map(|i| record(i, Severity::Low)).collect();
        let page = paginate(&feed, Some(Severity::Medium), 1, 10);
        assert_eq!(page.total, 0);
        assert!(page.data.is_empty());
    }
}
