mod api;
mod cart;
mod order;
mod pagination;
mod product;
mod upload;
mod user;
mod wishlist;

pub use self::api::{ApiResponse, ApiResponsePagination, StatusResponse};
pub use self::cart::{CartItemResponse, CartListResponse, DeletedCart, DeletedCartResponse};
pub use self::order::OrderResponse;
pub use self::pagination::Pagination;
pub use self::product::ProductResponse;
pub use self::upload::UploadResponse;
pub use self::user::UserProfileResponse;
pub use self::wishlist::WishlistItemResponse;
