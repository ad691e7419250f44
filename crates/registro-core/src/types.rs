//! # Domain Types
//!
//! Records fetched from the demo catalog API.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Remote Records                                  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │    Employee     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  name           │   │  id             │       │
//! │  │  title          │──►│                 │   │  name, email    │       │
//! │  │  price (Money)  │   └─────────────────┘   │  role, avatar   │       │
//! │  │  description    │                         └─────────────────┘       │
//! │  │  images         │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields the screens never show (password hashes, timestamps, category
//! slugs) are left out; serde skips unknown keys.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,

    pub title: String,

    /// Price converted to cents at deserialization.
    #[serde(deserialize_with = "Money::deserialize_price")]
    pub price: Money,

    #[serde(default)]
    pub description: String,

    /// Image URLs as supplied by the API. Often stale; see
    /// [`Product::placeholder_image_url`].
    #[serde(default)]
    pub images: Vec<String>,

    pub category: Category,
}

impl Product {
    /// Stable placeholder image keyed by product id.
    ///
    /// The API's own image links break often, so listings show this instead.
    pub fn placeholder_image_url(&self) -> String {
        format!("https://picsum.photos/id/{}/200/300", self.id)
    }
}

/// Product category (only the name is displayed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

// =============================================================================
// Employee
// =============================================================================

/// A staff member shown to employee sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub avatar: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_api_json() {
        let json = r#"{
            "id": 4,
            "title": "Handmade Fresh Table",
            "slug": "handmade-fresh-table",
            "price": 687,
            "description": "Andy shoes are designed to keeping in...",
            "category": {"id": 5, "name": "Others", "image": "https://placeimg.com/640/480/any"},
            "images": ["https://placeimg.com/640/480/any?r=0.9178516507833767"],
            "creationAt": "2024-01-01T00:00:00.000Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 4);
        assert_eq!(product.price, Money::from_cents(68_700));
        assert_eq!(product.category.name, "Others");
        assert_eq!(product.images.len(), 1);
        assert_eq!(
            product.placeholder_image_url(),
            "https://picsum.photos/id/4/200/300"
        );
    }

    #[test]
    fn test_product_missing_optional_fields() {
        let json = r#"{"id": 1, "title": "T", "price": 9.5, "category": {"name": "C"}}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description, "");
        assert!(product.images.is_empty());
        assert_eq!(product.price.cents(), 950);
    }

    #[test]
    fn test_employee_ignores_private_fields() {
        let json = r#"{
            "id": 1,
            "email": "john@mail.com",
            "password": "changeme",
            "name": "Jhon",
            "role": "customer",
            "avatar": "https://i.imgur.com/LDOO4Qs.jpg",
            "creationAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.name, "Jhon");
        assert_eq!(employee.role, "customer");

        let back = serde_json::to_value(&employee).unwrap();
        assert!(back.get("password").is_none());
    }
}
