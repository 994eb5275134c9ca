use crate::{
    notification::{NotificationAction, Notifier},
    service::debounce::Debouncer,
    store::CartStore,
};
use apiclient::abstract_trait::DynCartApi;
use chrono::Duration as CacheTtl;
use shared::{
    cache::CacheStore,
    domain::{
        requests::cart::{CreateCartRequest, DeleteCartRequest, UpdateCartRequest},
        responses::CartItemResponse,
    },
    errors::{ClientError, ServiceError},
    model::{CartItem, CartTotals},
    utils::validation_messages,
};
use std::{sync::Arc, time::Duration};
use tracing::{error, info};
use validator::Validate;

pub const CART_DEBOUNCE: Duration = Duration::from_millis(500);

const CARTS_CACHE_KEY: &str = "carts";
const CARTS_CACHE_TTL_SECS: i64 = 60;

/// Keeps the reactive cart store in sync with the remote cart resource:
/// optimistic local mutations first, debounced remote writes after, cache
/// invalidation plus re-fetch to reconcile with server truth.
#[derive(Clone)]
pub struct CartService {
    api: DynCartApi,
    store: CartStore,
    cache: Arc<CacheStore>,
    debouncer: Arc<Debouncer>,
    notifier: Notifier,
}

pub struct CartServiceDeps {
    pub api: DynCartApi,
    pub store: CartStore,
    pub cache: Arc<CacheStore>,
    pub notifier: Notifier,
}

impl CartService {
    pub fn new(deps: CartServiceDeps) -> Self {
        let CartServiceDeps {
            api,
            store,
            cache,
            notifier,
        } = deps;

        Self {
            api,
            store,
            cache,
            debouncer: Arc::new(Debouncer::new(CART_DEBOUNCE)),
            notifier,
        }
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// Opening the cart view also clears the unseen badge.
    pub async fn open_cart(&self) -> Result<Vec<CartItem>, ServiceError> {
        let items = self.fetch_carts().await?;
        self.store.mark_seen();
        Ok(items)
    }

    /// Read-through fetch: the "carts" cache key is the query identity;
    /// deleting it forces the next fetch back to the network.
    async fn fetch_carts(&self) -> Result<Vec<CartItem>, ServiceError> {
        if let Some(cached) = self
            .cache
            .get_from_cache::<Vec<CartItemResponse>>(CARTS_CACHE_KEY)
        {
            let items: Vec<CartItem> = cached.into_iter().map(CartItem::from).collect();
            self.reconcile(items.clone());
            return Ok(items);
        }

        info!("🛒 Fetching cart items");

        let response = self.api.fetch_carts().await?;

        self.cache.set_to_cache(
            CARTS_CACHE_KEY,
            &response.data.cart,
            CacheTtl::seconds(CARTS_CACHE_TTL_SECS),
        );

        let items: Vec<CartItem> = response.data.cart.into_iter().map(CartItem::from).collect();
        self.reconcile(items.clone());

        Ok(items)
    }

    pub async fn refresh(&self) -> Result<Vec<CartItem>, ServiceError> {
        self.cache.delete_from_cache(CARTS_CACHE_KEY);
        self.fetch_carts().await
    }

    fn reconcile(&self, items: Vec<CartItem>) {
        let totals = CartTotals::of(&items);
        self.store.replace_items(items);
        self.store.set_subtotal(totals.subtotal);
        self.store.set_total_item_count(totals.total_items);
    }

    pub async fn add_to_cart(&self, req: CreateCartRequest) -> Result<(), ServiceError> {
        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_messages(&errors)));
        }

        match self.api.create_cart(&req).await {
            Ok(response) => {
                info!("✅ Added product {} to cart", req.product_id);
                self.notifier.success(response.message);
                self.store.mark_unseen();

                if let Err(e) = self.refresh().await {
                    error!("❌ Failed to refresh cart after add: {e}");
                }

                Ok(())
            }
            Err(ClientError::Unauthorized) => {
                self.notifier.error_with(
                    "Unauthorized",
                    Some("Please login to add items to your cart".to_string()),
                    Some(NotificationAction::Login),
                );
                Err(ClientError::Unauthorized.into())
            }
            Err(e) => {
                error!("❌ Failed to add to cart: {e:?}");
                self.notifier.error(format!("Failed to add to cart: {e}"));
                Err(e.into())
            }
        }
    }

    /// Optimistic quantity edit. The store is mutated immediately; the remote
    /// write is debounced per cart-item id so rapid edits collapse into one
    /// request carrying the final value. A requested quantity below 1 is
    /// ignored entirely; removal goes through `remove_item`.
    pub fn set_quantity(&self, cart_id: &str, quantity: u32) {
        if quantity < 1 {
            return;
        }

        self.store.update_quantity(cart_id, quantity);

        let subtotal = CartTotals::of(&self.store.snapshot().items).subtotal;
        self.store.set_subtotal(subtotal);

        let service = self.clone();
        let req = UpdateCartRequest {
            cart_id: cart_id.to_string(),
            quantity,
        };

        self.debouncer.call(cart_id, async move {
            info!(
                "✏️ Updating cart quantity: id={} qty={}",
                req.cart_id, req.quantity
            );

            match service.api.update_cart(&req).await {
                Ok(_) => {
                    if let Err(e) = service.refresh().await {
                        error!("❌ Failed to refresh cart after update: {e}");
                    }
                }
                Err(e) => {
                    // The optimistic value stays in place; the next re-fetch
                    // reconciles against server truth.
                    error!("❌ Failed to update cart quantity: {e:?}");
                    service
                        .notifier
                        .error("Failed to update quantity. Please try again.");
                }
            }
        });
    }

    pub async fn remove_item(&self, cart_id: &str) -> Result<(), ServiceError> {
        info!("🗑️ Removing cart item: {cart_id}");

        let req = DeleteCartRequest::single(cart_id);

        match self.api.delete_cart(&req).await {
            Ok(response) => {
                self.debouncer.cancel(cart_id);

                let removed_id = response
                    .data
                    .cart
                    .map(|cart| cart.id)
                    .unwrap_or_else(|| req.id.clone());

                let previous_count = self.store.snapshot().total_items;
                self.store.remove_item(&removed_id);
                // Counter is decremented by exactly one, not recomputed from
                // the remaining set.
                self.store
                    .set_total_item_count(previous_count.saturating_sub(1));

                let subtotal = CartTotals::of(&self.store.snapshot().items).subtotal;
                self.store.set_subtotal(subtotal);

                self.cache.delete_from_cache(CARTS_CACHE_KEY);
                self.notifier.success("Item removed from cart");

                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to remove cart item {cart_id}: {e:?}");
                self.notifier
                    .error("Failed to remove item. Please try again.");
                Err(e.into())
            }
        }
    }

    /// Bulk removal used internally after order completion.
    pub async fn clear_remote(&self) -> Result<(), ServiceError> {
        self.api.delete_cart(&DeleteCartRequest::bulk()).await?;
        self.store.clear();
        self.cache.delete_from_cache(CARTS_CACHE_KEY);
        Ok(())
    }
}
