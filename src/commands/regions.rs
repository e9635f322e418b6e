use anyhow::Result;
use colored::Colorize;
use storefront_pricing::{config::Config, pricing::DeliveryZone};

/// Execute the regions command
pub fn execute(cfg: &Config, zone: Option<DeliveryZone>) -> Result<()> {
    let registry = cfg.build_registry()?;
    let zones: Vec<DeliveryZone> = match zone {
        Some(zone) => vec![zone],
        None => DeliveryZone::ALL.to_vec(),
    };

    for zone in zones {
        let rate = cfg.pricing.zones.get(zone);
        println!(
            "{} {}",
            zone.as_str().bold(),
            format!(
                "(₹{} + ₹{}/kg, {}-{} days)",
                rate.base_charge, rate.per_kg_charge, rate.min_delivery_days, rate.max_delivery_days
            )
            .dimmed()
        );
        for state in registry.states_in_zone(zone) {
            println!("  {:<4} {}", state.code.as_str().cyan(), state.name);
        }
        println!();
    }

    Ok(())
}
