mod cart;
mod checkout;
mod product;
mod size;
mod user;

pub use self::cart::{CartItem, CartTotals};
pub use self::checkout::{AddressInfo, OrderDraft, OrderDraftLine, PaymentMethod, PaymentSelection};
pub use self::product::Product;
pub use self::size::Size;
pub use self::user::UserProfile;
