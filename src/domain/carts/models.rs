//! Cart Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    domain::products::models::{Product, ProductUuid},
    uuids::TypedUuid,
};

/// Marker for browser-session identity.
#[derive(Debug, Clone, Copy)]
pub struct Session;

/// Session UUID
pub type SessionUuid = TypedUuid<Session>;

/// Session-scoped cart: an ordered list of lines, at most one per
/// (product, size label) composite key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

/// A single cart line with its price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub key: String,
    pub product_uuid: ProductUuid,
    pub name: String,
    pub image_url: String,
    pub size_label: String,
    pub unit_price: Decimal,
    pub qty: u32,
}

/// Composite cart key: product identity plus the chosen size label.
#[must_use]
pub fn cart_key(product: ProductUuid, size_label: &str) -> String {
    format!("{product}__{size_label}")
}

impl Cart {
    /// Add one unit of a product in the requested size.
    ///
    /// An existing line with the same composite key gains quantity instead of
    /// duplicating; otherwise a new line snapshots name, image and unit price.
    pub fn add(&mut self, product: &Product, requested_size: Option<&str>) {
        let (size_label, unit_price) = product.resolve_size(requested_size);
        let key = cart_key(product.uuid, &size_label);

        if let Some(existing) = self.items.iter_mut().find(|item| item.key == key) {
            existing.qty += 1;
            return;
        }

        self.items.push(CartItem {
            key,
            product_uuid: product.uuid,
            name: product.name.clone(),
            image_url: product.display_image(),
            size_label,
            unit_price,
            qty: 1,
        });
    }

    /// Remove the line with the given key; absent keys are a no-op.
    pub fn remove(&mut self, key: &str) {
        self.items.retain(|item| item.key != key);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price * qty` across lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.unit_price * Decimal::from(item.qty))
            .sum()
    }

    /// Sum of quantities, for the cart badge.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.qty).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart plus derived figures, as the cart view renders it.
#[derive(Debug, Clone)]
pub struct CartView {
    pub cart: Cart,
    pub total: Decimal,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::products::{models::Category, sizes::SizeOption};

    use super::*;

    fn sized_product(name: &str) -> Product {
        Product {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            description: String::new(),
            category: Category::Aguas,
            sizes: vec![
                SizeOption {
                    label: "1/2 Litro".to_string(),
                    price: Decimal::from(25),
                },
                SizeOption {
                    label: "1 Litro".to_string(),
                    price: Decimal::from(35),
                },
            ],
            price: Decimal::ZERO,
            image: String::new(),
            image_url: String::new(),
            is_active: true,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn adding_same_key_twice_increments_quantity() {
        let product = sized_product("Agua de Jamaica");
        let mut cart = Cart::default();

        cart.add(&product, Some("1/2 Litro"));
        cart.add(&product, Some("1/2 Litro"));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].qty, 2);
    }

    #[test]
    fn different_sizes_are_distinct_lines() {
        let product = sized_product("Agua de Jamaica");
        let mut cart = Cart::default();

        cart.add(&product, Some("1/2 Litro"));
        cart.add(&product, Some("1 Litro"));

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn total_sums_unit_price_times_qty() {
        let product = sized_product("Agua de Jamaica");
        let mut cart = Cart::default();

        cart.add(&product, Some("1/2 Litro"));
        cart.add(&product, Some("1/2 Litro"));
        cart.add(&product, Some("1 Litro"));

        // 25 * 2 + 35 * 1
        assert_eq!(cart.total(), Decimal::from(85));
    }

    #[test]
    fn clear_empties_all_lines() {
        let product = sized_product("Agua de Jamaica");
        let mut cart = Cart::default();

        cart.add(&product, Some("1/2 Litro"));
        cart.add(&product, Some("1 Litro"));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn remove_unknown_key_is_noop() {
        let product = sized_product("Agua de Jamaica");
        let mut cart = Cart::default();

        cart.add(&product, None);
        cart.remove("missing__key");

        assert_eq!(cart.items.len(), 1);

        let key = cart.items[0].key.clone();
        cart.remove(&key);

        assert!(cart.is_empty());
    }
}
