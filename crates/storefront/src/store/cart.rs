use shared::model::CartItem;
use std::sync::Arc;
use tokio::sync::watch;

/// Snapshot of the cart as currently known to the client. `total_items` and
/// `subtotal` are caller-written derived values, not recomputed here; call
/// sites must keep them consistent with `items` (see `CartTotals`).
#[derive(Debug, Clone, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total_items: u32,
    pub subtotal: f64,
    pub seen: bool,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            subtotal: 0.0,
            seen: true,
        }
    }
}

/// Process-wide reactive cart store. Mutations go through the watch channel,
/// so they are synchronous and immediately visible to every subscriber.
#[derive(Debug, Clone)]
pub struct CartStore {
    tx: Arc<watch::Sender<CartState>>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CartState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> CartState {
        self.tx.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().items.is_empty()
    }

    /// Accretive merge: incoming items whose id is already held are dropped,
    /// not overwritten. Reconciliation goes through `replace_items`.
    pub fn set_items(&self, items: Vec<CartItem>) {
        self.tx.send_modify(|state| {
            for item in items {
                if state.items.iter().all(|existing| existing.id != item.id) {
                    state.items.push(item);
                }
            }
        });
    }

    pub fn replace_items(&self, items: Vec<CartItem>) {
        self.tx.send_modify(|state| state.items = items);
    }

    pub fn update_quantity(&self, id: &str, quantity: u32) {
        self.tx.send_modify(|state| {
            if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                item.quantity = quantity;
            }
        });
    }

    pub fn remove_item(&self, id: &str) {
        self.tx.send_modify(|state| state.items.retain(|item| item.id != id));
    }

    pub fn set_total_item_count(&self, count: u32) {
        self.tx.send_modify(|state| state.total_items = count);
    }

    pub fn set_subtotal(&self, amount: f64) {
        self.tx.send_modify(|state| state.subtotal = amount);
    }

    pub fn mark_seen(&self) {
        self.tx.send_modify(|state| state.seen = true);
    }

    pub fn mark_unseen(&self) {
        self.tx.send_modify(|state| state.seen = false);
    }

    pub fn clear(&self) {
        self.tx.send_modify(|state| *state = CartState::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::model::{Product, Size};

    fn item(id: &str, quantity: u32) -> CartItem {
        CartItem {
            id: id.into(),
            product: Product {
                id: format!("p-{id}"),
                brand: "Aran".into(),
                category: "men".into(),
                title: "Cable Knit".into(),
                description: String::new(),
                price: 20.0,
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

    #[test]
    fn merge_drops_items_with_existing_ids() {
        let store = CartStore::new();
        store.set_items(vec![item("c-1", 1)]);

        let mut duplicate = item("c-1", 5);
        duplicate.product.title = "Different Snapshot".into();
        store.set_items(vec![duplicate, item("c-2", 2)]);

        let state = store.snapshot();
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].quantity, 1);
        assert_eq!(state.items[0].product.title, "Cable Knit");
    }

    #[test]
    fn remove_is_idempotent() {
        let store = CartStore::new();
        store.set_items(vec![item("c-1", 1)]);

        store.remove_item("c-1");
        store.remove_item("c-1");
        store.remove_item("missing");

        assert!(store.is_empty());
    }

    #[test]
    fn mutations_are_visible_to_subscribers_immediately() {
        let store = CartStore::new();
        let rx = store.subscribe();

        store.set_items(vec![item("c-1", 3)]);

        assert_eq!(rx.borrow().items.len(), 1);
        assert_eq!(rx.borrow().items[0].quantity, 3);
    }

    #[test]
    fn clear_resets_to_default_state() {
        let store = CartStore::new();
        store.set_items(vec![item("c-1", 2)]);
        store.set_total_item_count(2);
        store.set_subtotal(40.0);
        store.mark_unseen();

        store.clear();

        assert_eq!(store.snapshot(), CartState::default());
        assert!(store.snapshot().seen);
    }

    #[test]
    fn seen_flag_toggles() {
        let store = CartStore::new();
        assert!(store.snapshot().seen);

        store.mark_unseen();
        assert!(!store.snapshot().seen);

        store.mark_seen();
        assert!(store.snapshot().seen);
    }

    #[test]
    fn update_quantity_ignores_unknown_ids() {
        let store = CartStore::new();
        store.set_items(vec![item("c-1", 1)]);

        store.update_quantity("missing", 7);

        assert_eq!(store.snapshot().items[0].quantity, 1);
    }
}
