use crate::model::{Product, Size};
use crate::utils::round_cents;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub product: Product,
    pub size: Size,
    pub quantity: u32,
    pub user_id: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        round_cents(self.product.price * self.quantity as f64)
    }
}

/// Derived cart values. The stores keep these as caller-written fields, so
/// every call site that mutates items must route its recomputation through
/// here to stay consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub total_items: u32,
}

impl CartTotals {
    pub fn of(items: &[CartItem]) -> Self {
        let subtotal = round_cents(
            items
                .iter()
                .map(|item| item.product.price * item.quantity as f64)
                .sum(),
        );
        let total_items = items.iter().map(|item| item.quantity).sum();

        Self {
            subtotal,
            total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64) -> Product {
        Product {
            id: "p-1".into(),
            brand: "Aran".into(),
            category: "men".into(),
            title: "Wool Sweater".into(),
            description: "Heavy knit".into(),
            price,
            discount_percentage: 0.0,
            stock: 10,
            images: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: id.into(),
            product: product(price),
            size: Size::M,
            quantity,
            user_id: "u-1".into(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn totals_sum_price_times_quantity() {
        let items = vec![item("c-1", 20.0, 2), item("c-2", 9.99, 1)];
        let totals = CartTotals::of(&items);

        assert_eq!(totals.subtotal, 49.99);
        assert_eq!(totals.total_items, 3);
    }

    #[test]
    fn totals_of_empty_cart_are_zero() {
        let totals = CartTotals::of(&[]);

        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.total_items, 0);
    }
}
