use anyhow::Result;
use colored::Colorize;
use storefront_pricing::config::Config;
use tracing::warn;

/// Execute the preview command
pub fn execute(cfg: &Config, region: &str) -> Result<()> {
    let calculator = cfg.build_calculator()?;
    let resolution = calculator.registry().resolve(region);

    if resolution.is_fallback() {
        warn!("Unknown region '{}', showing the fallback zone", region);
    }

    println!(
        "{} ({}): ₹{}",
        region.bold(),
        resolution.zone.as_str().cyan(),
        calculator.delivery_charge_preview(region)
    );
    println!(
        "  {}",
        format!("Free delivery on orders of ₹{} or more", calculator.free_delivery_threshold()).dimmed()
    );

    Ok(())
}
