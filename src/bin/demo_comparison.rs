//! Comparative Analysis Demo
//! Run: ./target/release/demo_comparison [--seed N]

use anyhow::Result;
use clap::Parser;
use fleet_analytics::api::StatisticsService;
use fleet_analytics::catalog;
use fleet_analytics::models::{ComparisonType, MetricId, TimeRange};

/// Print ranked comparisons and their summaries for every metric
#[derive(Parser, Debug)]
#[command(name = "demo_comparison")]
#[command(about = "Show ranked fleet comparisons with summary statistics")]
struct Args {
    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Comparison type: vehicle, driver or route
    #[arg(long, default_value = "vehicle")]
    comparison_type: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let comparison_type: ComparisonType = args.comparison_type.parse()?;
    let service = StatisticsService::new(args.seed);

    println!("\n{}", "=".repeat(64));
    println!("         FLEET COMPARATIVE ANALYSIS ({})", comparison_type);
    println!("{}\n", "=".repeat(64));

    for metric_id in MetricId::ALL {
        let def = catalog::metric(metric_id);
        let result = service
            .get_comparison(comparison_type, metric_id, TimeRange::Month)
            .await?;

        println!("{} [{}]", def.name.to_uppercase(), def.unit);
        println!("{}", "-".repeat(56));
        println!("  {:>4}  {:<22} {:>10}  {:>7}  {:<8}", "Rank", "Name", "Value", "Chg %", "Status");

        for row in &result.rows {
            println!(
                "  {:>4}  {:<22} {:>10.1}  {:>+7.1}  {:<8}",
                row.rank,
                row.entity_name,
                row.value,
                row.change_percent,
                format!("{:?}", row.status).to_lowercase()
            );
        }

        if let Some(summary) = &result.summary {
            println!("  {}", "-".repeat(52));
            println!(
                "  Best: {} ({:.1})   Worst: {} ({:.1})",
                summary.best.entity_name, summary.best.value,
                summary.worst.entity_name, summary.worst.value
            );
            println!(
                "  Mean: {:.2} {}   Median: {:.2} {}",
                summary.mean, def.unit, summary.median, def.unit
            );
        }
        println!();
    }

    println!("{}\n", "=".repeat(64));

    Ok(())
}
