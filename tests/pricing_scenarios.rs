/// Integration tests for order pricing across regions and cart flows
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use storefront_pricing::{
    cart::{Cart, CartLine, CartMutation, CartView},
    pricing::{DeliveryZone, PricingCalculator, PricingPolicy},
    regions::RegionRegistry,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn line(item_id: u64, product_id: u64, quantity: u32, unit_price: Decimal) -> CartLine {
    CartLine {
        item_id,
        product_id,
        product_name: format!("Candle {}", product_id),
        quantity,
        unit_price,
    }
}

#[test]
fn test_total_is_sum_of_parts_for_every_region() {
    let calc = PricingCalculator::default();

    for state in calc.registry().states() {
        for subtotal in [dec!(0), dec!(1), dec!(349.5), dec!(998), dec!(999), dec!(4500)] {
            let summary = calc
                .compute_order_summary_on(subtotal, &state.name, None, today())
                .unwrap();

            assert_eq!(summary.zone, state.zone, "zone for {}", state.name);
            assert_eq!(
                summary.total_amount,
                summary.subtotal + summary.tax + summary.delivery_charge + summary.service_charge
            );
            assert_eq!(summary.tax, summary.tax.round());
            assert_eq!(summary.delivery_charge, summary.delivery_charge.round());
            assert_eq!(summary.is_free_delivery, subtotal >= dec!(999));
            assert!(summary.estimated_delivery_date.earliest <= summary.estimated_delivery_date.latest);
        }
    }
}

#[test]
fn test_unknown_region_is_priced_as_far() {
    let calc = PricingCalculator::default();
    let unknown = calc
        .compute_order_summary_on(dec!(400), "Narnia", None, today())
        .unwrap();
    let far = calc
        .compute_order_summary_on(dec!(400), "Kerala", None, today())
        .unwrap();

    assert_eq!(unknown.zone, DeliveryZone::Far);
    assert_eq!(unknown.delivery_charge, far.delivery_charge);
    assert_eq!(unknown.estimated_delivery_days, far.estimated_delivery_days);
}

#[test]
fn test_region_names_are_matched_loosely() {
    let calc = PricingCalculator::default();
    let summary = calc
        .compute_order_summary_on(dec!(100), "  tamil nadu ", None, today())
        .unwrap();
    assert_eq!(summary.zone, DeliveryZone::Far);

    let summary = calc
        .compute_order_summary_on(dec!(100), "DELHI", None, today())
        .unwrap();
    assert_eq!(summary.zone, DeliveryZone::Nearby);
}

#[test]
fn test_heavier_parcels_cost_more() {
    let calc = PricingCalculator::default();
    let light = calc
        .compute_order_summary_on(dec!(100), "Bihar", Some(dec!(0.5)), today())
        .unwrap();
    let heavy = calc
        .compute_order_summary_on(dec!(100), "Bihar", Some(dec!(3)), today())
        .unwrap();

    // 120 + 0.5 * 20 and 120 + 3 * 20
    assert_eq!(light.delivery_charge, dec!(130));
    assert_eq!(heavy.delivery_charge, dec!(180));
}

#[test]
fn test_custom_policy_changes_every_component() {
    let policy = PricingPolicy {
        tax_rate: dec!(0.05),
        free_delivery_threshold: dec!(2000),
        service_charge: dec!(10),
        creation_days: 2,
        ..PricingPolicy::default()
    };
    let calc = PricingCalculator::new(policy, RegionRegistry::builtin());

    let summary = calc
        .compute_order_summary_on(dec!(1500), "Rajasthan", None, today())
        .unwrap();
    assert_eq!(summary.tax, dec!(75));
    assert_eq!(summary.tax_rate_percent, dec!(5));
    assert!(!summary.is_free_delivery);
    assert_eq!(summary.delivery_charge, dec!(55));
    assert_eq!(summary.total_amount, dec!(1640));
    assert_eq!(summary.estimated_delivery_days.min, 4);
}

#[test]
fn test_cart_flow_keeps_order_and_reprices() {
    let mut view = CartView::new(PricingCalculator::default());
    let cart = Cart {
        id: 9,
        items: vec![
            line(1, 10, 1, dec!(300)),
            line(2, 11, 2, dec!(250)),
            line(3, 12, 1, dec!(199)),
        ],
    };
    view.load(cart, today()).unwrap();
    assert_eq!(view.summary().unwrap().subtotal, dec!(999));
    assert!(view.summary().unwrap().is_free_delivery);

    // Server answers with lines in a different order
    let mutation = CartMutation::for_quantity(2, 1);
    let server_cart = Cart {
        id: 9,
        items: vec![
            line(3, 12, 1, dec!(199)),
            line(2, 11, 1, dec!(250)),
            line(1, 10, 1, dec!(300)),
        ],
    };
    view.reconcile(&mutation, server_cart, today()).unwrap();

    let ids: Vec<u64> = view.cart().unwrap().items.iter().map(|l| l.item_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    let summary = view.summary().unwrap();
    assert_eq!(summary.subtotal, dec!(749));
    assert!(!summary.is_free_delivery);
    assert_eq!(view.amount_to_free_delivery().unwrap(), dec!(250));

    view.set_region("Assam", today()).unwrap();
    assert_eq!(view.summary().unwrap().zone, DeliveryZone::Far);

    view.reconcile(&CartMutation::Clear, Cart::default(), today()).unwrap();
    assert!(view.summary().is_none());
}
