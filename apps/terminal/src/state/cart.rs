//! # Cart
//!
//! Shopping cart behind the product list's "Agregar al carrito" action.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Command               AppState                 Cart Change             │
//! │  ───────               ────────                 ───────────             │
//! │                                                                         │
//! │  add 4 2 ────────────► add_to_cart() ─────────► items.push / qty += 2  │
//! │                                                                         │
//! │  remove 4 ───────────► remove_from_cart() ────► items.remove(i)        │
//! │                                                                         │
//! │  clear ──────────────► clear_cart() ──────────► items.clear()          │
//! │                                                                         │
//! │  logout ─────────────► logout() ──────────────► cart discarded         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no checkout. The cart lives and dies with the session.

use chrono::{DateTime, Utc};
use serde::Serialize;

use registro_core::{CoreError, CoreResult, Money, Product, MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// An item in the cart.
///
/// Title and price are frozen when the product is first added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub product_id: i64,

    pub title: String,

    pub unit_price: Money,

    pub quantity: i64,

    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id,
            title: product.title.clone(),
            unit_price: product.price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product again
///   increases its quantity)
/// - Every quantity is in `1..=MAX_ITEM_QUANTITY`
/// - At most `MAX_CART_ITEMS` distinct lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    pub items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    pub created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product, or increases its quantity if already present.
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity` is not positive, or the line would
    ///   go past `MAX_ITEM_QUANTITY`
    /// - `CartTooLarge` if a new line would exceed `MAX_CART_ITEMS`
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if quantity < 1 || quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::InvalidQuantity {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Removes a line by product id.
    pub fn remove_item(&mut self, product_id: i64) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::NotInCart(product_id))
        } else {
            Ok(())
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registro_core::Category;

    fn test_product(id: i64, cents: i64) -> Product {
        Product {
            id,
            title: format!("Producto {}", id),
            price: Money::from_cents(cents),
            description: String::new(),
            images: Vec::new(),
            category: Category {
                name: "Varios".into(),
            },
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product(1, 4_400); // Q 44.00

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total(), Money::from_cents(8_800));
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_price_frozen_at_first_add() {
        let mut cart = Cart::new();
        let mut product = test_product(1, 1_000);
        cart.add_item(&product, 1).unwrap();

        product.price = Money::from_cents(5_000);
        cart.add_item(&product, 1).unwrap();

        assert_eq!(cart.total(), Money::from_cents(2_000));
    }

    #[test]
    fn test_cart_rejects_bad_quantities() {
        let mut cart = Cart::new();
        let product = test_product(1, 100);

        assert!(matches!(
            cart.add_item(&product, 0),
            Err(CoreError::InvalidQuantity { requested: 0, .. })
        ));
        assert!(cart.add_item(&product, -3).is_err());

        cart.add_item(&product, MAX_ITEM_QUANTITY).unwrap();
        assert!(matches!(
            cart.add_item(&product, 1),
            Err(CoreError::InvalidQuantity { .. })
        ));
        assert_eq!(cart.total_quantity(), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_cart_max_lines() {
        let mut cart = Cart::new();
        for id in 0..MAX_CART_ITEMS as i64 {
            cart.add_item(&test_product(id, 100), 1).unwrap();
        }

        let extra = test_product(10_000, 100);
        assert_eq!(
            cart.add_item(&extra, 1),
            Err(CoreError::CartTooLarge { max: MAX_CART_ITEMS })
        );

        // Existing lines can still grow.
        cart.add_item(&test_product(0, 100), 1).unwrap();
    }

    #[test]
    fn test_cart_huge_remote_price_does_not_overflow() {
        let product: Product = serde_json::from_str(
            r#"{"id": 9, "title": "Yate", "price": 1e17, "category": {"name": "Lujo"}}"#,
        )
        .unwrap();

        let mut cart = Cart::new();
        cart.add_item(&product, 2).unwrap();
        cart.add_item(&test_product(1, 100), 1).unwrap();

        assert_eq!(cart.items[0].line_total().cents(), i64::MAX);
        assert_eq!(cart.total().cents(), i64::MAX);
    }

    #[test]
    fn test_cart_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 100), 1).unwrap();
        cart.add_item(&test_product(2, 200), 1).unwrap();

        cart.remove_item(1).unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.remove_item(1), Err(CoreError::NotInCart(1)));

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }
}
