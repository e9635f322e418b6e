use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::pricing::{DeliveryZone, PricingCalculator, PricingPolicy};
use crate::regions::RegionRegistry;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pricing: PricingPolicy,
    #[serde(default)]
    pub regions: RegionsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegionsConfig {
    /// state code -> zone, applied on top of the builtin table
    #[serde(default)]
    pub zone_overrides: HashMap<String, DeliveryZone>,
}

impl Config {
    /// Region table with this config's overrides applied
    pub fn build_registry(&self) -> anyhow::Result<RegionRegistry> {
        Ok(RegionRegistry::builtin().with_overrides(&self.regions.zone_overrides)?)
    }

    pub fn build_calculator(&self) -> anyhow::Result<PricingCalculator> {
        Ok(PricingCalculator::new(
            self.pricing.clone(),
            self.build_registry()?,
        ))
    }
}

/// Load configuration from `path` (optional) and `STOREFRONT_PRICING__*`
/// environment variables
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(
            config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(false),
        )
        .add_source(config::Environment::with_prefix("STOREFRONT_PRICING").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("Server port must not be 0");
    }
    if !matches!(cfg.server.log_format.as_str(), "text" | "json") {
        anyhow::bail!(
            "Log format must be 'text' or 'json', got '{}'",
            cfg.server.log_format
        );
    }

    let pricing = &cfg.pricing;
    if pricing.tax_rate < Decimal::ZERO || pricing.tax_rate >= Decimal::ONE {
        anyhow::bail!("Tax rate must be in [0, 1), got {}", pricing.tax_rate);
    }
    if pricing.free_delivery_threshold < Decimal::ZERO {
        anyhow::bail!("Free delivery threshold must not be negative");
    }
    if pricing.service_charge < Decimal::ZERO {
        anyhow::bail!("Service charge must not be negative");
    }
    if pricing.default_weight_kg < Decimal::ZERO {
        anyhow::bail!("Default weight must not be negative");
    }

    for (zone, rate) in pricing.zones.iter() {
        if rate.base_charge <= Decimal::ZERO {
            anyhow::bail!("Zone '{}' base charge must be positive", zone);
        }
        if rate.per_kg_charge < Decimal::ZERO {
            anyhow::bail!("Zone '{}' per-kg charge must not be negative", zone);
        }
        if rate.min_delivery_days > rate.max_delivery_days {
            anyhow::bail!(
                "Zone '{}' min delivery days ({}) exceed max ({})",
                zone,
                rate.min_delivery_days,
                rate.max_delivery_days
            );
        }
        if pricing.creation_days.checked_add(rate.max_delivery_days).is_none() {
            anyhow::bail!(
                "Zone '{}' creation days ({}) plus max delivery days ({}) overflow",
                zone,
                pricing.creation_days,
                rate.max_delivery_days
            );
        }
    }

    // Unknown state codes in overrides
    cfg.build_registry()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = create_test_config();
        assert!(validate_config(&cfg).is_ok());
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.pricing.free_delivery_threshold, Decimal::from(999));
    }

    #[test]
    fn test_validate_config_rejects_full_tax_rate() {
        let mut cfg = create_test_config();
        cfg.pricing.tax_rate = Decimal::ONE;

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Tax rate must be in [0, 1)"));
    }

    #[test]
    fn test_validate_config_rejects_inverted_delivery_window() {
        let mut cfg = create_test_config();
        cfg.pricing.zones.medium.min_delivery_days = 9;

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Zone 'medium'"));
    }

    #[test]
    fn test_validate_config_rejects_negative_amounts() {
        let mut cfg = create_test_config();
        cfg.pricing.service_charge = Decimal::NEGATIVE_ONE;
        assert!(validate_config(&cfg).is_err());

        let mut cfg = create_test_config();
        cfg.pricing.zones.far.base_charge = Decimal::ZERO;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_config_rejects_overflowing_delivery_days() {
        let mut cfg = create_test_config();
        cfg.pricing.creation_days = u32::MAX;

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("overflow"));
    }

    #[test]
    fn test_validate_config_rejects_unknown_override() {
        let mut cfg = create_test_config();
        cfg.regions
            .zone_overrides
            .insert("XX".to_string(), DeliveryZone::Local);

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("'XX'"));
    }

    #[test]
    fn test_validate_config_rejects_port_zero() {
        let mut cfg = create_test_config();
        cfg.server.port = 0;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_build_calculator_applies_overrides() {
        let mut cfg = create_test_config();
        cfg.regions
            .zone_overrides
            .insert("ga".to_string(), DeliveryZone::Nearby);

        let calc = cfg.build_calculator().unwrap();
        assert_eq!(calc.registry().zone_for_code("GA"), DeliveryZone::Nearby);
        assert_eq!(calc.delivery_charge_preview("Goa"), Decimal::from(80));
    }

    fn create_test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                log_level: "debug".to_string(),
                log_format: "json".to_string(),
            },
            pricing: PricingPolicy::default(),
            regions: RegionsConfig::default(),
        }
    }
}
