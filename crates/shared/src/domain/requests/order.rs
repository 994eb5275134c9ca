use crate::model::{AddressInfo, OrderDraft, PaymentMethod, Size};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub product_id: String,
    pub size: Size,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Items cannot be empty"))]
    pub items: Vec<OrderLineRequest>,

    pub shipping: AddressInfo,
    pub payment_method: PaymentMethod,
    pub card_last4: Option<String>,
    pub subtotal: f64,
    pub shipping_cost: f64,
    pub tax: f64,
    pub total: f64,
}

impl From<OrderDraft> for CreateOrderRequest {
    fn from(draft: OrderDraft) -> Self {
        Self {
            items: draft
                .items
                .into_iter()
                .map(|line| OrderLineRequest {
                    product_id: line.product_id,
                    size: line.size,
                    quantity: line.quantity,
                    price: line.price,
                })
                .collect(),
            shipping: draft.shipping,
            payment_method: draft.payment_method,
            card_last4: draft.card_last4,
            subtotal: draft.subtotal,
            shipping_cost: draft.shipping_cost,
            tax: draft.tax,
            total: draft.total,
        }
    }
}
