use anyhow::Result;
use colored::Colorize;
use rust_decimal::Decimal;
use storefront_pricing::{config::Config, pricing::OrderSummary};
use tracing::{info, warn};

/// Execute the quote command
pub fn execute(
    cfg: &Config,
    subtotal: Decimal,
    region: &str,
    weight: Option<Decimal>,
    json: bool,
) -> Result<()> {
    let calculator = cfg.build_calculator()?;

    if calculator.registry().resolve(region).is_fallback() {
        warn!("Unknown region '{}', pricing with the fallback zone", region);
    }

    let summary = calculator.compute_order_summary(subtotal, region, weight)?;
    info!(
        "Quoted {} to {} ({}): total {}",
        subtotal, region, summary.zone, summary.total_amount
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(region, &summary, calculator.amount_to_free_delivery(subtotal));
    }

    Ok(())
}

fn print_summary(region: &str, summary: &OrderSummary, to_free_delivery: Decimal) {
    println!("{}", format!("Order summary for {}", region).bold());
    println!("  {}: {}", "Zone".cyan(), summary.zone);
    println!("  {}: ₹{}", "Subtotal".cyan(), summary.subtotal);
    println!(
        "  {}: ₹{}",
        format!("GST ({}%)", summary.tax_rate_percent).cyan(),
        summary.tax
    );
    if summary.is_free_delivery {
        println!("  {}: {}", "Delivery".cyan(), "FREE".green());
    } else {
        println!("  {}: ₹{}", "Delivery".cyan(), summary.delivery_charge);
    }
    if !summary.service_charge.is_zero() {
        println!("  {}: ₹{}", "Service charge".cyan(), summary.service_charge);
    }
    println!("  {}: {}", "Total".cyan(), format!("₹{}", summary.total_amount).bold());
    println!(
        "  {}: {}-{} days ({} to {})",
        "Delivery estimate".cyan(),
        summary.estimated_delivery_days.min,
        summary.estimated_delivery_days.max,
        summary.estimated_delivery_date.earliest.format("%d %b"),
        summary.estimated_delivery_date.latest.format("%d %b %Y"),
    );
    if to_free_delivery > Decimal::ZERO {
        println!(
            "  {}",
            format!("Add ₹{} more for free delivery", to_free_delivery).dimmed()
        );
    }
}
