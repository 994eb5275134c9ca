mod auth;
mod cart;
mod order;
mod product;
mod search;
mod upload;
mod user;
mod wishlist;

pub use self::auth::{AuthApiTrait, DynAuthApi};
pub use self::cart::{CartApiTrait, DynCartApi};
pub use self::order::{DynOrderApi, OrderApiTrait};
pub use self::product::{DynProductApi, ProductApiTrait};
pub use self::search::{DynSearchApi, SearchApiTrait};
pub use self::upload::{DynUploadApi, UploadApiTrait};
pub use self::user::{DynUserApi, UserApiTrait};
pub use self::wishlist::{DynWishlistApi, WishlistApiTrait};
