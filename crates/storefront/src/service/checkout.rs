use crate::{notification::Notifier, service::cart::CartService};
use apiclient::abstract_trait::DynOrderApi;
use shared::{
    domain::{requests::order::CreateOrderRequest, responses::OrderResponse},
    errors::ServiceError,
    model::{AddressInfo, OrderDraft, OrderDraftLine, PaymentSelection},
    utils::{round_cents, validation_messages},
};
use thiserror::Error;
use tracing::{error, info};
use validator::Validate;

pub const SHIPPING_COST: f64 = 5.99;
pub const TAX_RATE: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Shipping,
    Payment,
    Review,
    Complete,
}

impl CheckoutStep {
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
            CheckoutStep::Complete => "Complete",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            CheckoutStep::Shipping => 0,
            CheckoutStep::Payment => 1,
            CheckoutStep::Review => 2,
            CheckoutStep::Complete => 3,
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cannot {action} from the {from:?} step")]
    InvalidTransition {
        from: CheckoutStep,
        action: &'static str,
    },

    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderTotals {
    pub fn compute(subtotal: f64) -> Self {
        let tax = round_cents(subtotal * TAX_RATE);
        let total = round_cents(subtotal + SHIPPING_COST + tax);

        Self {
            subtotal,
            shipping: SHIPPING_COST,
            tax,
            total,
        }
    }
}

/// Linear checkout sequencer: Shipping → Payment → Review → Complete, back
/// only from Payment and Review, no skipping. One wizard per checkout
/// session; the step data is discarded with it.
pub struct CheckoutWizard {
    step: CheckoutStep,
    address: AddressInfo,
    payment: PaymentSelection,
    cart: CartService,
    orders: DynOrderApi,
    notifier: Notifier,
}

pub struct CheckoutWizardDeps {
    pub cart: CartService,
    pub orders: DynOrderApi,
    pub notifier: Notifier,
}

impl CheckoutWizard {
    /// Entry guard: an empty cart never enters the wizard; the caller is
    /// expected to route back to the cart view.
    pub fn begin(deps: CheckoutWizardDeps) -> Result<Self, CheckoutError> {
        let CheckoutWizardDeps {
            cart,
            orders,
            notifier,
        } = deps;

        if cart.store().is_empty() {
            notifier.error_with(
                "Your cart is empty",
                Some("Please add items to your cart before proceeding to checkout".to_string()),
                None,
            );
            return Err(CheckoutError::EmptyCart);
        }

        Ok(Self {
            step: CheckoutStep::Shipping,
            address: AddressInfo::default(),
            payment: PaymentSelection::default(),
            cart,
            orders,
            notifier,
        })
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn address(&self) -> &AddressInfo {
        &self.address
    }

    pub fn payment(&self) -> &PaymentSelection {
        &self.payment
    }

    pub fn totals(&self) -> OrderTotals {
        OrderTotals::compute(self.cart.store().snapshot().subtotal)
    }

    pub fn submit_shipping(&mut self, info: AddressInfo) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Shipping {
            return Err(CheckoutError::InvalidTransition {
                from: self.step,
                action: "submit shipping",
            });
        }

        info.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        self.address = info;
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    pub fn submit_payment(&mut self, selection: PaymentSelection) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Payment {
            return Err(CheckoutError::InvalidTransition {
                from: self.step,
                action: "submit payment",
            });
        }

        selection
            .validate_selection()
            .map_err(ServiceError::Validation)?;

        self.payment = selection;
        self.step = CheckoutStep::Review;
        Ok(())
    }

    pub fn back(&mut self) -> Result<CheckoutStep, CheckoutError> {
        self.step = match self.step {
            CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Review => CheckoutStep::Payment,
            from => {
                return Err(CheckoutError::InvalidTransition {
                    from,
                    action: "go back",
                });
            }
        };

        Ok(self.step)
    }

    /// What the review step renders and what gets submitted.
    pub fn draft(&self) -> OrderDraft {
        let snapshot = self.cart.store().snapshot();
        let totals = OrderTotals::compute(snapshot.subtotal);

        OrderDraft {
            items: snapshot
                .items
                .iter()
                .map(|item| OrderDraftLine {
                    product_id: item.product.id.clone(),
                    size: item.size,
                    quantity: item.quantity,
                    price: item.product.price,
                })
                .collect(),
            shipping: self.address.clone(),
            payment_method: self.payment.payment_method,
            card_last4: self.payment.last_four_digits(),
            subtotal: totals.subtotal,
            shipping_cost: totals.shipping,
            tax: totals.tax,
            total: totals.total,
        }
    }

    /// Terminal transition. Submits the order, clears the cart (remote and
    /// local) and enters `Complete`; there is no way back from there. A
    /// submission failure leaves the wizard at Review, retryable.
    pub async fn place_order(&mut self) -> Result<OrderResponse, CheckoutError> {
        if self.step != CheckoutStep::Review {
            return Err(CheckoutError::InvalidTransition {
                from: self.step,
                action: "place order",
            });
        }

        let req = CreateOrderRequest::from(self.draft());

        info!("📦 Placing order with {} items", req.items.len());

        let response = match self.orders.create_order(&req).await {
            Ok(response) => response,
            Err(e) => {
                error!("❌ Failed to place order: {e:?}");
                self.notifier
                    .error("Failed to place order. Please try again.");
                return Err(ServiceError::from(e).into());
            }
        };

        if let Err(e) = self.cart.clear_remote().await {
            error!("❌ Failed to clear remote cart after order: {e}");
        }
        self.cart.store().clear();

        self.step = CheckoutStep::Complete;
        self.notifier.success(response.message.clone());

        info!("✅ Order {} placed successfully", response.data.id);

        Ok(response.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        service::cart::{CartService, CartServiceDeps},
        store::CartStore,
    };
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::{
        cache::CacheStore,
        domain::{
            requests::cart::{CreateCartRequest, DeleteCartRequest, UpdateCartRequest},
            responses::{ApiResponse, CartItemResponse, CartListResponse, DeletedCartResponse},
        },
        errors::ClientError,
        model::{CartItem, PaymentMethod, Product, Size},
    };
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    struct NullCartApi;

    #[async_trait]
    impl apiclient::abstract_trait::CartApiTrait for NullCartApi {
        async fn fetch_carts(&self) -> Result<ApiResponse<CartListResponse>, ClientError> {
            Ok(ApiResponse {
                status: "success".into(),
                message: "OK".into(),
                data: CartListResponse { cart: vec![] },
            })
        }

        async fn create_cart(
            &self,
            _req: &CreateCartRequest,
        ) -> Result<ApiResponse<CartItemResponse>, ClientError> {
            unimplemented!("not exercised")
        }

        async fn update_cart(
            &self,
            _req: &UpdateCartRequest,
        ) -> Result<ApiResponse<CartItemResponse>, ClientError> {
            unimplemented!("not exercised")
        }

        async fn delete_cart(
            &self,
            _req: &DeleteCartRequest,
        ) -> Result<ApiResponse<DeletedCartResponse>, ClientError> {
            Ok(ApiResponse {
                status: "success".into(),
                message: "OK".into(),
                data: DeletedCartResponse { cart: None },
            })
        }
    }

    #[derive(Default)]
    struct FakeOrderApi {
        requests: Mutex<Vec<CreateOrderRequest>>,
        fail: AtomicBool,
    }

    #[async_trait]
    impl apiclient::abstract_trait::OrderApiTrait for FakeOrderApi {
        async fn create_order(
            &self,
            req: &CreateOrderRequest,
        ) -> Result<ApiResponse<OrderResponse>, ClientError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(ClientError::Api {
                    status: 500,
                    message: "order rejected".into(),
                });
            }

            self.requests.lock().push(req.clone());

            Ok(ApiResponse {
                status: "success".into(),
                message: "Order created successfully".into(),
                data: OrderResponse {
                    id: "o-1".into(),
                    user_id: "u-1".into(),
                    total: req.total,
                    status: "pending".into(),
                    created_at: None,
                    updated_at: None,
                },
            })
        }

        async fn find_by_user(
            &self,
            _user_id: &str,
        ) -> Result<ApiResponse<Vec<OrderResponse>>, ClientError> {
            Ok(ApiResponse {
                status: "success".into(),
                message: "OK".into(),
                data: vec![],
            })
        }
    }

    fn cart_item(price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: "c-1".into(),
            product: Product {
                id: "p-1".into(),
                brand: "Aran".into(),
                category: "men".into(),
                title: "Cable Knit".into(),
                description: String::new(),
                price,
                discount_percentage: 0.0,
                stock: 10,
                images: vec![],
                created_at: None,
                updated_at: None,
            },
            size: Size::M,
            quantity,
            user_id: "u-1".into(),
            created_at: None,
            updated_at: None,
        }
    }

    fn cart_service_with_items(items: Vec<CartItem>) -> CartService {
        let store = CartStore::new();
        let subtotal: f64 = items
            .iter()
            .map(|i| i.product.price * i.quantity as f64)
            .sum();
        let count: u32 = items.iter().map(|i| i.quantity).sum();
        store.set_items(items);
        store.set_subtotal(subtotal);
        store.set_total_item_count(count);

        CartService::new(CartServiceDeps {
            api: Arc::new(NullCartApi),
            store,
            cache: Arc::new(CacheStore::new()),
            notifier: Notifier::new(),
        })
    }

    fn shipping() -> AddressInfo {
        AddressInfo {
            first_name: "Jo".into(),
            last_name: "Knitter".into(),
            email: "jo@example.com".into(),
            phone: "5551234567".into(),
            street: "1 Wool Way".into(),
            city: "Galway".into(),
            state: "GA".into(),
            zip_code: "30301".into(),
            country: "US".into(),
        }
    }

    fn payment() -> PaymentSelection {
        PaymentSelection {
            payment_method: PaymentMethod::CreditCard,
            card_number: "4242 4242 4242 4242".into(),
            card_holder: "Jo Knitter".into(),
            expiry_date: "04/27".into(),
            cvv: "123".into(),
        }
    }

    fn wizard_with(cart: CartService, orders: Arc<FakeOrderApi>) -> CheckoutWizard {
        CheckoutWizard::begin(CheckoutWizardDeps {
            cart,
            orders,
            notifier: Notifier::new(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn an_empty_cart_cannot_enter_the_wizard() {
        let result = CheckoutWizard::begin(CheckoutWizardDeps {
            cart: cart_service_with_items(vec![]),
            orders: Arc::new(FakeOrderApi::default()),
            notifier: Notifier::new(),
        });

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[tokio::test]
    async fn review_is_unreachable_without_shipping_and_payment() {
        let mut wizard = wizard_with(
            cart_service_with_items(vec![cart_item(20.0, 2)]),
            Arc::new(FakeOrderApi::default()),
        );

        assert!(matches!(
            wizard.submit_payment(payment()),
            Err(CheckoutError::InvalidTransition { .. })
        ));
        assert!(matches!(
            wizard.place_order().await,
            Err(CheckoutError::InvalidTransition { .. })
        ));
        assert_eq!(wizard.step(), CheckoutStep::Shipping);
    }

    #[tokio::test]
    async fn steps_advance_in_order_and_back_transitions_are_explicit() {
        let mut wizard = wizard_with(
            cart_service_with_items(vec![cart_item(20.0, 2)]),
            Arc::new(FakeOrderApi::default()),
        );

        assert!(matches!(
            wizard.back(),
            Err(CheckoutError::InvalidTransition { .. })
        ));

        wizard.submit_shipping(shipping()).unwrap();
        assert_eq!(wizard.step(), CheckoutStep::Payment);

        assert_eq!(wizard.back().unwrap(), CheckoutStep::Shipping);
        wizard.submit_shipping(shipping()).unwrap();

        wizard.submit_payment(payment()).unwrap();
        assert_eq!(wizard.step(), CheckoutStep::Review);

        assert_eq!(wizard.back().unwrap(), CheckoutStep::Payment);
    }

    #[tokio::test]
    async fn invalid_shipping_keeps_the_wizard_on_the_shipping_step() {
        let mut wizard = wizard_with(
            cart_service_with_items(vec![cart_item(20.0, 2)]),
            Arc::new(FakeOrderApi::default()),
        );

        let mut info = shipping();
        info.email = "not-an-email".into();

        assert!(matches!(
            wizard.submit_shipping(info),
            Err(CheckoutError::Service(ServiceError::Validation(_)))
        ));
        assert_eq!(wizard.step(), CheckoutStep::Shipping);
    }

    #[tokio::test]
    async fn totals_apply_flat_shipping_and_eight_percent_tax() {
        let wizard = wizard_with(
            cart_service_with_items(vec![cart_item(20.0, 2)]),
            Arc::new(FakeOrderApi::default()),
        );

        let totals = wizard.totals();
        assert_eq!(totals.subtotal, 40.0);
        assert_eq!(totals.shipping, 5.99);
        assert_eq!(totals.tax, 3.2);
        assert_eq!(totals.total, 49.19);
    }

    #[tokio::test]
    async fn placing_the_order_clears_the_cart_and_completes() {
        let orders = Arc::new(FakeOrderApi::default());
        let cart = cart_service_with_items(vec![cart_item(20.0, 2)]);
        let mut wizard = wizard_with(cart.clone(), orders.clone());

        wizard.submit_shipping(shipping()).unwrap();
        wizard.submit_payment(payment()).unwrap();
        let order = wizard.place_order().await.unwrap();

        assert_eq!(wizard.step(), CheckoutStep::Complete);
        assert_eq!(order.total, 49.19);

        let state = cart.store().snapshot();
        assert!(state.items.is_empty());
        assert_eq!(state.total_items, 0);
        assert_eq!(state.subtotal, 0.0);

        let submitted = orders.requests.lock();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].items.len(), 1);
        assert_eq!(submitted[0].card_last4.as_deref(), Some("4242"));

        assert!(matches!(
            wizard.back(),
            Err(CheckoutError::InvalidTransition { .. })
        ));
    }

    #[tokio::test]
    async fn a_rejected_order_leaves_the_wizard_retryable_at_review() {
        let orders = Arc::new(FakeOrderApi::default());
        orders.fail.store(true, Ordering::SeqCst);

        let cart = cart_service_with_items(vec![cart_item(20.0, 2)]);
        let mut wizard = wizard_with(cart.clone(), orders.clone());

        wizard.submit_shipping(shipping()).unwrap();
        wizard.submit_payment(payment()).unwrap();

        assert!(wizard.place_order().await.is_err());
        assert_eq!(wizard.step(), CheckoutStep::Review);
        assert!(!cart.store().snapshot().items.is_empty());

        orders.fail.store(false, Ordering::SeqCst);
        assert!(wizard.place_order().await.is_ok());
        assert_eq!(wizard.step(), CheckoutStep::Complete);
    }
}
