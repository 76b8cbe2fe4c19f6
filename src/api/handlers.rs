//! REST API handlers for the fleet analytics dashboard.
//!
//! These handlers use the shared StatisticsService.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::service::StatisticsService;
use crate::catalog::MetricDefinition;
use crate::models::{
    AnomalyRecord, ComparisonRow, ComparisonType, KpiSnapshot, MetricId, Severity, SummaryStats,
    TimeRange, TrendSeries,
};

// ============================================================================
// Response Types (JSON-serializable versions)
// ============================================================================

#[derive(Serialize)]
pub struct MetricResponse {
    pub id: MetricId,
    pub name: &'static str,
    pub unit: &'static str,
    pub color: &'static str,
    pub directionality: crate::models::Directionality,
}

impl From<&'static MetricDefinition> for MetricResponse {
    fn from(m: &'static MetricDefinition) -> Self {
        Self {
            id: m.id,
            name: m.name,
            unit: m.unit,
            color: m.color,
            directionality: m.directionality,
        }
    }
}

#[derive(Serialize)]
pub struct EntityResponse {
    pub id: &'static str,
    pub name: &'static str,
    pub comparison_type: ComparisonType,
}

#[derive(Serialize)]
pub struct ComparisonResponse {
    pub comparison_type: ComparisonType,
    pub metric: MetricId,
    pub time_range: TimeRange,
    pub rows: Vec<ComparisonRow>,
    pub summary: Option<SummaryStats>,
}

#[derive(Serialize)]
pub struct TrendsResponse {
    pub time_range: TimeRange,
    pub series: Vec<TrendSeries>,
}

#[derive(Serialize)]
pub struct AnomaliesResponse {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<AnomalyRecord>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn bad_request(err: impl ToString) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn internal_error(err: impl ToString) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize)]
pub struct TimeRangeQuery {
    pub time_range: Option<String>,
}

#[derive(Deserialize)]
pub struct TrendsQuery {
    pub time_range: Option<String>,
    /// Comma-separated metric ids
    pub metrics: Option<String>,
}

#[derive(Deserialize)]
pub struct ComparisonQuery {
    pub comparison_type: Option<String>,
    pub metric: Option<String>,
    pub time_range: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct AnomaliesQuery {
    pub severity: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

fn parse_time_range(raw: &Option<String>) -> Result<TimeRange, HandlerError> {
    match raw {
        Some(s) => s.parse().map_err(bad_request),
        None => Ok(TimeRange::Month),
    }
}

/// "all" and absence both mean no severity filter
fn parse_severity(raw: &Option<String>) -> Result<Option<Severity>, HandlerError> {
    match raw.as_deref() {
        None | Some("all") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(bad_request),
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub type AppState = Arc<StatisticsService>;

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /api/v1/metrics
pub async fn get_metrics(State(service): State<AppState>) -> Json<Vec<MetricResponse>> {
    Json(service.metrics().iter().map(MetricResponse::from).collect())
}

/// GET /api/v1/entities/:comparison_type
pub async fn get_entities(
    State(service): State<AppState>,
    Path(comparison_type): Path<String>,
) -> Result<Json<Vec<EntityResponse>>, HandlerError> {
    let ct: ComparisonType = comparison_type.parse().map_err(bad_request)?;
    let entities = service
        .entities(ct)
        .into_iter()
        .map(|e| EntityResponse {
            id: e.id,
            name: e.name,
            comparison_type: e.comparison_type,
        })
        .collect();
    Ok(Json(entities))
}

/// GET /api/v1/kpis
pub async fn get_kpis(
    State(service): State<AppState>,
    Query(params): Query<TimeRangeQuery>,
) -> Result<Json<Vec<KpiSnapshot>>, HandlerError> {
    let time_range = parse_time_range(&params.time_range)?;
    match service.get_kpis(time_range).await {
        Ok(kpis) => Ok(Json(kpis)),
        Err(e) => Err(internal_error(e)),
    }
}

/// GET /api/v1/trends?time_range=month&metrics=fuel_consumption,co2_emission
pub async fn get_trends(
    State(service): State<AppState>,
    Query(params): Query<TrendsQuery>,
) -> Result<Json<TrendsResponse>, HandlerError> {
    let time_range = parse_time_range(&params.time_range)?;
    let metrics: Vec<MetricId> = match &params.metrics {
        Some(list) => list
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.trim().parse())
            .collect::<Result<_, _>>()
            .map_err(bad_request)?,
        None => vec![MetricId::FuelConsumption],
    };
    match service.get_trends(time_range, &metrics).await {
        Ok(series) => Ok(Json(TrendsResponse { time_range, series })),
        Err(e) => Err(internal_error(e)),
    }
}

/// GET /api/v1/comparison?comparison_type=vehicle&metric=fuel_consumption
pub async fn get_comparison(
    State(service): State<AppState>,
    Query(params): Query<ComparisonQuery>,
) -> Result<Json<ComparisonResponse>, HandlerError> {
    let comparison_type: ComparisonType = match &params.comparison_type {
        Some(s) => s.parse().map_err(bad_request)?,
        None => ComparisonType::Vehicle,
    };
    let metric: MetricId = match &params.metric {
        Some(s) => s.parse().map_err(bad_request)?,
        None => MetricId::FuelConsumption,
    };
    let time_range = parse_time_range(&params.time_range)?;

    match service.get_comparison(comparison_type, metric, time_range).await {
        Ok(mut result) => {
            if let Some(limit) = params.limit {
                result.rows.truncate(limit);
            }
            Ok(Json(ComparisonResponse {
                comparison_type,
                metric,
                time_range,
                rows: result.rows,
                summary: result.summary,
            }))
        }
        Err(e) => Err(internal_error(e)),
    }
}

/// GET /api/v1/anomalies?severity=high&page=2&limit=10
pub async fn get_anomalies(
    State(service): State<AppState>,
    Query(params): Query<AnomaliesQuery>,
) -> Result<Json<AnomaliesResponse>, HandlerError> {
    let severity = parse_severity(&params.severity)?;
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(10);

    match service.get_anomalies(severity, page, limit).await {
        Ok(result) => Ok(Json(AnomaliesResponse {
            total: result.total,
            page: result.page,
            limit: result.limit,
            data: result.data,
        })),
        Err(e) => Err(internal_error(e)),
    }
}
