use crate::model::Size;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AddressInfo {
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 7, message = "Phone number must be at least 7 digits"))]
    pub phone: String,

    #[validate(length(min = 3, message = "Street is required"))]
    pub street: String,

    #[validate(length(min = 2, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 2, message = "State is required"))]
    pub state: String,

    #[validate(length(min = 3, message = "Zip code is required"))]
    pub zip_code: String,

    #[validate(length(min = 2, message = "Country is required"))]
    pub country: String,
}

impl Default for AddressInfo {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "US".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    ApplePay,
    GooglePay,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::GooglePay => "Google Pay",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSelection {
    pub payment_method: PaymentMethod,
    pub card_number: String,
    pub card_holder: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl Default for PaymentSelection {
    fn default() -> Self {
        Self {
            payment_method: PaymentMethod::CreditCard,
            card_number: String::new(),
            card_holder: String::new(),
            expiry_date: String::new(),
            cvv: String::new(),
        }
    }
}

impl PaymentSelection {
    /// Card fields are only meaningful for the credit card method; the other
    /// methods hand off to an external flow after order submission.
    pub fn validate_selection(&self) -> Result<(), Vec<String>> {
        if self.payment_method != PaymentMethod::CreditCard {
            return Ok(());
        }

        let mut errors = Vec::new();

        let digits: String = self
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if digits.len() < 13 || digits.len() > 19 || !digits.chars().all(|c| c.is_ascii_digit()) {
            errors.push("Card number must be 13 to 19 digits".to_string());
        }

        if self.card_holder.trim().len() < 2 {
            errors.push("Card holder name is required".to_string());
        }

        if !is_valid_expiry(&self.expiry_date) {
            errors.push("Expiry date must be in MM/YY format".to_string());
        }

        if self.cvv.len() < 3 || self.cvv.len() > 4 || !self.cvv.chars().all(|c| c.is_ascii_digit())
        {
            errors.push("CVV must be 3 or 4 digits".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn last_four_digits(&self) -> Option<String> {
        if self.payment_method != PaymentMethod::CreditCard {
            return None;
        }

        let digits: String = self
            .card_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if digits.len() < 4 {
            return None;
        }

        Some(digits[digits.len() - 4..].to_string())
    }
}

fn is_valid_expiry(value: &str) -> bool {
    let Some((month, year)) = value.split_once('/') else {
        return false;
    };

    let month_ok = month
        .parse::<u32>()
        .map(|m| (1..=12).contains(&m))
        .unwrap_or(false);
    let year_ok = year.len() == 2 && year.chars().all(|c| c.is_ascii_digit());

    month_ok && year_ok
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraftLine {
    pub product_id: String,
    pub size: Size,
    pub quantity: u32,
    pub price: f64,
}

/// Assembled at order submission and discarded afterwards; the server is the
/// system of record once the order is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub items: Vec<OrderDraftLine>,
    pub shipping: AddressInfo,
    pub payment_method: PaymentMethod,
    pub card_last4: Option<String>,
    pub subtotal: f64,
    pub shipping_cost: f64,
    pub tax: f64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_card_selection_requires_card_fields() {
        let selection = PaymentSelection::default();
        let errors = selection.validate_selection().unwrap_err();

        assert!(errors.iter().any(|e| e.contains("Card number")));
        assert!(errors.iter().any(|e| e.contains("CVV")));
    }

    #[test]
    fn non_card_methods_skip_card_validation() {
        let selection = PaymentSelection {
            payment_method: PaymentMethod::Paypal,
            ..PaymentSelection::default()
        };

        assert!(selection.validate_selection().is_ok());
    }

    #[test]
    fn last_four_digits_masks_card_number() {
        let selection = PaymentSelection {
            card_number: "4242 4242 4242 4242".to_string(),
            card_holder: "Jo Knitter".to_string(),
            expiry_date: "04/27".to_string(),
            cvv: "123".to_string(),
            ..PaymentSelection::default()
        };

        assert!(selection.validate_selection().is_ok());
        assert_eq!(selection.last_four_digits().as_deref(), Some("4242"));
    }

    #[test]
    fn expiry_rejects_bad_month() {
        assert!(!is_valid_expiry("13/27"));
        assert!(!is_valid_expiry("0427"));
        assert!(is_valid_expiry("04/27"));
    }
}
