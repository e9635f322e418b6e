//! Fragrance/colour variant lookup for the product page.

use serde::Serialize;

use super::Product;

/// Distinct fragrances and colours offered across a product family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariantOptions {
    pub fragrances: Vec<String>,
    pub colors: Vec<String>,
}

impl VariantOptions {
    pub fn from_siblings<'a, I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut options = Self::default();
        for product in products {
            if let Some(fragrance) = non_empty(&product.fragrance) {
                options.fragrances.push(fragrance.to_string());
            }
            if let Some(color) = non_empty(&product.color) {
                options.colors.push(color.to_string());
            }
        }
        options.fragrances.sort();
        options.fragrances.dedup();
        options.colors.sort();
        options.colors.dedup();
        options
    }

    pub fn has_choices(&self) -> bool {
        self.fragrances.len() > 1 || self.colors.len() > 1
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn same(value: &Option<String>, wanted: &str) -> bool {
    non_empty(value).is_some_and(|v| v.eq_ignore_ascii_case(wanted.trim()))
}

/// Find the product to navigate to after the shopper picks a fragrance
/// and/or colour.
///
/// Tries an exact match on both attributes first, then another product
/// with the chosen fragrance, then another product with the chosen colour.
/// Returns `None` when nothing matches or the only match is `current`.
pub fn find_variant<'a>(
    current: &Product,
    family: &'a [Product],
    fragrance: Option<&str>,
    color: Option<&str>,
) -> Option<&'a Product> {
    let fragrance = fragrance.map(str::trim).filter(|f| !f.is_empty());
    let color = color.map(str::trim).filter(|c| !c.is_empty());

    if fragrance.is_none() && color.is_none() {
        return None;
    }

    let exact = family.iter().find(|p| {
        p.id != current.id
            && fragrance.map_or(true, |f| same(&p.fragrance, f))
            && color.map_or(true, |c| same(&p.color, c))
    });
    if exact.is_some() {
        return exact;
    }

    if let Some(f) = fragrance {
        if let Some(found) = family
            .iter()
            .find(|p| p.id != current.id && same(&p.fragrance, f))
        {
            return Some(found);
        }
    }

    color.and_then(|c| {
        family
            .iter()
            .find(|p| p.id != current.id && same(&p.color, c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn candle(id: u64, fragrance: &str, color: &str) -> Product {
        Product {
            id,
            name: format!("Pillar {}", id),
            description: String::new(),
            price: Decimal::from(599),
            stock_quantity: 5,
            available: true,
            featured: false,
            category: Some("pillar".to_string()),
            fragrance: Some(fragrance.to_string()),
            color: Some(color.to_string()),
        }
    }

    fn family() -> Vec<Product> {
        vec![
            candle(1, "Vanilla", "Ivory"),
            candle(2, "Vanilla", "Rose"),
            candle(3, "Sandalwood", "Ivory"),
            candle(4, "Jasmine", "Sage"),
        ]
    }

    #[test]
    fn test_options_are_sorted_and_unique() {
        let mut products = family();
        products[3].color = Some("  ".to_string());

        let options = VariantOptions::from_siblings(&products);
        assert_eq!(options.fragrances, vec!["Jasmine", "Sandalwood", "Vanilla"]);
        assert_eq!(options.colors, vec!["Ivory", "Rose"]);
        assert!(options.has_choices());
        assert!(!VariantOptions::from_siblings(&products[..1]).has_choices());
    }

    #[test]
    fn test_exact_match_wins() {
        let products = family();
        let found = find_variant(&products[0], &products, Some("vanilla"), Some("Rose"));
        assert_eq!(found.map(|p| p.id), Some(2));
    }

    #[test]
    fn test_falls_back_to_fragrance_then_color() {
        let products = family();

        let found = find_variant(&products[0], &products, Some("Sandalwood"), Some("Rose"));
        assert_eq!(found.map(|p| p.id), Some(3));

        let found = find_variant(&products[0], &products, Some("Oud"), Some("Sage"));
        assert_eq!(found.map(|p| p.id), Some(4));
    }

    #[test]
    fn test_current_product_is_not_a_variant() {
        let products = family();
        assert!(find_variant(&products[3], &products, Some("Jasmine"), Some("Sage")).is_none());
        assert!(find_variant(&products[0], &products, None, None).is_none());
        assert!(find_variant(&products[0], &products, Some("Oud"), Some("Black")).is_none());
    }

    #[test]
    fn test_single_attribute_choice() {
        let products = family();
        let found = find_variant(&products[0], &products, None, Some("Ivory"));
        assert_eq!(found.map(|p| p.id), Some(3));
    }
}
