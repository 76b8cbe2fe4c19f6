//! REST API server for the fleet analytics dashboard.
//!
//! Usage:
//!   ./target/release/fleet_api [OPTIONS]
//!
//! Options:
//!   --port PORT          Port to listen on (default: 8080)
//!   --seed N             Seed the mock data RNG for reproducible responses
//!   --mock-delay-ms N    Simulated backend latency per request (default: 0)
//!
//! Endpoints:
//!   GET /api/v1/health                    Health check
//!   GET /api/v1/metrics                   Metric catalog
//!   GET /api/v1/entities/:type            Entity catalog (vehicle/driver/route)
//!   GET /api/v1/kpis                      Dashboard KPI tiles
//!   GET /api/v1/trends                    Trend series
//!   GET /api/v1/comparison                Ranked comparison + summary
//!   GET /api/v1/anomalies                 Fraud-detection feed, paginated

use anyhow::Result;
use axum::{routing::get, Router};
use clap::Parser;
use fleet_analytics::api::{handlers, StatisticsService};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fleet analytics API server
#[derive(Parser, Debug)]
#[command(name = "fleet_api")]
#[command(about = "Serve the fleet analytics dashboard API")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Random seed for reproducible mock data
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated backend latency in milliseconds
    #[arg(long, default_value = "0")]
    mock_delay_ms: u64,
}

fn print_banner(port: u16) {
    println!("============================================================");
    println!("            FLEET ANALYTICS API SERVER");
    println!("============================================================");
    println!();
    println!("  Port:     {}", port);
    println!("  REST:     http://localhost:{}/api/v1/", port);
    println!();
    println!("Endpoints:");
    println!("  GET /api/v1/health           Health check");
    println!("  GET /api/v1/metrics          Metric catalog");
    println!("  GET /api/v1/entities/:type   Entity catalog");
    println!("  GET /api/v1/kpis             Dashboard KPIs");
    println!("  GET /api/v1/trends           Trend series");
    println!("  GET /api/v1/comparison       Ranked comparison");
    println!("  GET /api/v1/anomalies        Anomaly feed");
    println!();
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let args = Args::parse();

    print_banner(args.port);

    let mut service = StatisticsService::new(args.seed);
    if args.mock_delay_ms > 0 {
        service = service.with_mock_delay(Duration::from_millis(args.mock_delay_ms));
    }
    let service = Arc::new(service);

    let addr: SocketAddr = format!("0.0.0.0:{}", args.port).parse()?;
    let app = create_router(service);

    tracing::info!("Starting REST server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(service: Arc<StatisticsService>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/api/v1/health", get(handlers::health))
        // Catalogs
        .route("/api/v1/metrics", get(handlers::get_metrics))
        .route("/api/v1/entities/:comparison_type", get(handlers::get_entities))
        // Dashboard data
        .route("/api/v1/kpis", get(handlers::get_kpis))
        .route("/api/v1/trends", get(handlers::get_trends))
        .route("/api/v1/comparison", get(handlers::get_comparison))
        .route("/api/v1/anomalies", get(handlers::get_anomalies))
        // State and middleware
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
