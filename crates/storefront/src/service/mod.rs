pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod debounce;
pub mod profile;
pub mod search;
pub mod session;
pub mod wishlist;

pub use self::cart::{CartService, CartServiceDeps};
pub use self::catalog::{CatalogService, DiscountFeed};
pub use self::checkout::{CheckoutError, CheckoutStep, CheckoutWizard, CheckoutWizardDeps};
pub use self::debounce::Debouncer;
pub use self::profile::{ProfileService, ProfileServiceDeps};
pub use self::search::{SearchState, SearchTypeahead};
pub use self::session::{SessionService, SessionServiceDeps};
pub use self::wishlist::WishlistService;
