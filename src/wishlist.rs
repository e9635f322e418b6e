use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub item_id: u64,
    pub product_id: u64,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn item_for_product(&self, product_id: u64) -> Option<&WishlistItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }
}

/// What a heart-button press should send to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistToggle {
    Add { product_id: u64 },
    /// `item_id` is `None` when the local index has not seen the server
    /// row yet; the caller must fetch the wishlist to find it
    Remove { product_id: u64, item_id: Option<u64> },
}

/// Local wishlist membership with in-flight tracking
#[derive(Debug, Clone, Default)]
pub struct WishlistIndex {
    /// product id -> server item id, unknown until the next sync
    items: HashMap<u64, Option<u64>>,
    in_flight: HashSet<u64>,
}

impl WishlistIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace membership with the server's view
    pub fn sync(&mut self, wishlist: &Wishlist) {
        self.items = wishlist
            .items
            .iter()
            .map(|item| (item.product_id, Some(item.item_id)))
            .collect();
    }

    pub fn contains(&self, product_id: u64) -> bool {
        self.items.contains_key(&product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_updating(&self, product_id: u64) -> bool {
        self.in_flight.contains(&product_id)
    }

    /// Decide between add and remove and mark the product in flight
    pub fn begin_toggle(&mut self, product_id: u64) -> Result<WishlistToggle, AppError> {
        if !self.in_flight.insert(product_id) {
            return Err(AppError::Conflict(format!(
                "Wishlist update for product {} already in progress",
                product_id
            )));
        }

        let toggle = match self.items.get(&product_id) {
            Some(&item_id) => WishlistToggle::Remove {
                product_id,
                item_id,
            },
            None => WishlistToggle::Add { product_id },
        };
        Ok(toggle)
    }

    /// Record a successful toggle.
    ///
    /// Pass the server wishlist when the response carried one so that the
    /// item id of a fresh add is known for a later removal.
    pub fn complete(&mut self, toggle: WishlistToggle, server: Option<&Wishlist>) {
        match server {
            Some(wishlist) => self.sync(wishlist),
            None => match toggle {
                WishlistToggle::Add { product_id } => {
                    self.items.insert(product_id, None);
                }
                WishlistToggle::Remove { product_id, .. } => {
                    self.items.remove(&product_id);
                }
            },
        }
        self.in_flight.remove(&toggle_product(toggle));
    }

    /// The request failed; membership is unchanged
    pub fn fail(&mut self, product_id: u64) {
        self.in_flight.remove(&product_id);
    }
}

fn toggle_product(toggle: WishlistToggle) -> u64 {
    match toggle {
        WishlistToggle::Add { product_id } | WishlistToggle::Remove { product_id, .. } => product_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(item_id: u64, product_id: u64) -> WishlistItem {
        WishlistItem {
            item_id,
            product_id,
            added_at: DateTime::from_timestamp(1_760_000_000, 0).unwrap(),
        }
    }

    fn sample() -> Wishlist {
        Wishlist {
            id: 1,
            items: vec![item(100, 10), item(101, 11)],
        }
    }

    #[test]
    fn test_sync_replaces_membership() {
        let mut index = WishlistIndex::new();
        index.sync(&sample());
        assert!(index.contains(10));
        assert_eq!(index.len(), 2);

        index.sync(&Wishlist::default());
        assert!(index.is_empty());
    }

    #[test]
    fn test_toggle_adds_missing_product() {
        let mut index = WishlistIndex::new();
        index.sync(&sample());

        let toggle = index.begin_toggle(12).unwrap();
        assert_eq!(toggle, WishlistToggle::Add { product_id: 12 });
        assert!(index.is_updating(12));

        index.complete(toggle, None);
        assert!(index.contains(12));
        assert!(!index.is_updating(12));
    }

    #[test]
    fn test_toggle_removes_known_product() {
        let mut index = WishlistIndex::new();
        index.sync(&sample());

        let toggle = index.begin_toggle(11).unwrap();
        assert_eq!(
            toggle,
            WishlistToggle::Remove {
                product_id: 11,
                item_id: Some(101)
            }
        );

        let server = Wishlist {
            id: 1,
            items: vec![item(100, 10)],
        };
        index.complete(toggle, Some(&server));
        assert!(!index.contains(11));
    }

    #[test]
    fn test_remove_after_local_add_needs_lookup() {
        let mut index = WishlistIndex::new();
        let toggle = index.begin_toggle(5).unwrap();
        index.complete(toggle, None);

        let toggle = index.begin_toggle(5).unwrap();
        assert_eq!(
            toggle,
            WishlistToggle::Remove {
                product_id: 5,
                item_id: None
            }
        );
    }

    #[test]
    fn test_second_toggle_while_in_flight_conflicts() {
        let mut index = WishlistIndex::new();
        index.begin_toggle(10).unwrap();

        let result = index.begin_toggle(10);
        assert!(matches!(result, Err(AppError::Conflict(_))));

        index.fail(10);
        assert!(!index.is_updating(10));
        assert!(!index.contains(10));
        assert!(index.begin_toggle(10).is_ok());
    }

    #[test]
    fn test_item_for_product() {
        let wishlist = sample();
        assert_eq!(wishlist.item_for_product(11).unwrap().item_id, 101);
        assert!(wishlist.item_for_product(99).is_none());
    }
}
