//! Fuel Anomaly Feed Demo
//! Run: ./target/release/demo_anomalies [--severity high] [--limit 10] [--seed N]

use anyhow::Result;
use clap::Parser;
use fleet_analytics::api::StatisticsService;
use fleet_analytics::models::Severity;

/// Page through the fraud-detection anomaly feed
#[derive(Parser, Debug)]
#[command(name = "demo_anomalies")]
#[command(about = "Show the fuel anomaly feed with severity filtering")]
struct Args {
    /// Severity filter: low, medium, high or all
    #[arg(long, default_value = "all")]
    severity: String,

    /// Records per page
    #[arg(long, default_value = "10")]
    limit: usize,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let severity: Option<Severity> = match args.severity.as_str() {
        "all" => None,
        s => Some(s.parse()?),
    };
    let limit = args.limit.max(1);
    let service = StatisticsService::new(args.seed);

    println!("\n{}", "=".repeat(72));
    println!("         FUEL ANOMALY FEED (severity: {})", args.severity);
    println!("{}\n", "=".repeat(72));

    let mut page = 1;
    loop {
        let result = service.get_anomalies(severity, page, limit).await?;
        if result.data.is_empty() {
            if page == 1 {
                println!("  No anomalies match the filter.");
            }
            break;
        }

        let pages = result.total.div_ceil(limit);
        println!("PAGE {}/{} ({} total)", result.page, pages, result.total);
        println!("{}", "-".repeat(68));
        for record in &result.data {
            println!(
                "  {}  {}  [{:<6}] {:<7} {:>7.0} PLN  {}",
                record.id,
                record.date,
                format!("{:?}", record.severity).to_lowercase(),
                record.vehicle_id,
                record.potential_loss,
                record.kind.label()
            );
            println!("       {}: {}", record.driver_id, record.description);
        }
        println!();

        if page >= pages {
            break;
        }
        page += 1;
    }

    println!("{}\n", "=".repeat(72));

    Ok(())
}
