use crate::{
    notification::Notifier,
    service::{
        CartService, CartServiceDeps, CatalogService, CheckoutError, CheckoutWizard,
        CheckoutWizardDeps, ProfileService, ProfileServiceDeps, SearchTypeahead, SessionService,
        SessionServiceDeps, WishlistService,
    },
    store::{CartStore, UserStore},
};
use apiclient::{abstract_trait::DynOrderApi, client::ApiClients, presence::PresenceClient};
use shared::cache::CacheStore;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub cart_store: CartStore,
    pub user_store: UserStore,
    pub notifier: Notifier,
    pub carts: CartService,
    pub search: SearchTypeahead,
    pub session: SessionService,
    pub profile: ProfileService,
    pub wishlist: WishlistService,
    pub catalog: CatalogService,
    orders: DynOrderApi,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("carts", &"CartService")
            .field("search", &"SearchTypeahead")
            .field("session", &"SessionService")
            .field("profile", &"ProfileService")
            .field("wishlist", &"WishlistService")
            .field("catalog", &"CatalogService")
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub clients: ApiClients,
    pub presence: PresenceClient,
    pub notifier: Notifier,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            clients,
            presence,
            notifier,
        } = deps;

        let cart_store = CartStore::new();
        let user_store = UserStore::new();
        let cache = Arc::new(CacheStore::new());

        let carts = CartService::new(CartServiceDeps {
            api: clients.carts.clone(),
            store: cart_store.clone(),
            cache: cache.clone(),
            notifier: notifier.clone(),
        });

        let search = SearchTypeahead::new(clients.search.clone(), cache);

        let session = SessionService::new(SessionServiceDeps {
            auth: clients.auth.clone(),
            presence,
            user_store: user_store.clone(),
            cart_store: cart_store.clone(),
            notifier: notifier.clone(),
        });

        let profile = ProfileService::new(ProfileServiceDeps {
            user_api: clients.user.clone(),
            upload_api: clients.upload.clone(),
            user_store: user_store.clone(),
            notifier: notifier.clone(),
        });

        let wishlist = WishlistService::new(clients.wishlist.clone(), notifier.clone());
        let catalog = CatalogService::new(clients.products.clone());

        Self {
            cart_store,
            user_store,
            notifier,
            carts,
            search,
            session,
            profile,
            wishlist,
            catalog,
            orders: clients.orders,
        }
    }

    /// One wizard per checkout session; fails fast on an empty cart.
    pub fn begin_checkout(&self) -> Result<CheckoutWizard, CheckoutError> {
        CheckoutWizard::begin(CheckoutWizardDeps {
            cart: self.carts.clone(),
            orders: self.orders.clone(),
            notifier: self.notifier.clone(),
        })
    }
}
