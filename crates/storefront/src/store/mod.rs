mod cart;
mod user;

pub use self::cart::{CartState, CartStore};
pub use self::user::{UserState, UserStore};
