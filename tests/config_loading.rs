/// Integration tests for loading configuration from TOML files
use rust_decimal_macros::dec;
use std::io::Write;
use std::path::Path;
use storefront_pricing::{config::load_config, pricing::DeliveryZone};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let cfg = load_config(Path::new("/nonexistent/storefront-pricing.toml")).unwrap();

    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.pricing.tax_rate, dec!(0.18));
    assert_eq!(cfg.pricing.free_delivery_threshold, dec!(999));
    assert_eq!(cfg.pricing.zones.far.base_charge, dec!(180));
    assert!(cfg.regions.zone_overrides.is_empty());
}

#[test]
fn test_partial_file_overrides_defaults() {
    let file = write_config(
        r#"
[server]
port = 9090

[pricing]
free_delivery_threshold = 1499
service_charge = 20

[pricing.zones.far]
base_charge = 200
per_kg_charge = 30
min_delivery_days = 8
max_delivery_days = 12

[regions.zone_overrides]
GA = "medium"
"#,
    );

    let cfg = load_config(file.path()).unwrap();
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.server.log_level, "info");
    assert_eq!(cfg.pricing.free_delivery_threshold, dec!(1499));
    assert_eq!(cfg.pricing.service_charge, dec!(20));
    assert_eq!(cfg.pricing.tax_rate, dec!(0.18));
    assert_eq!(cfg.pricing.zones.far.base_charge, dec!(200));
    assert_eq!(cfg.pricing.zones.local.base_charge, dec!(50));

    let calc = cfg.build_calculator().unwrap();
    assert_eq!(calc.registry().zone_for_code("GA"), DeliveryZone::Medium);
    assert_eq!(calc.delivery_charge_preview("Kerala"), dec!(200));
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config(
        r#"
[pricing]
tax_rate = 1.2
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Tax rate"));

    let file = write_config(
        r#"
[regions.zone_overrides]
ZZ = "local"
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_malformed_toml_is_an_error() {
    let file = write_config("[pricing\ntax_rate = ");
    assert!(load_config(file.path()).is_err());
}
