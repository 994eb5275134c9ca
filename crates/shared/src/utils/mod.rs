mod logs;
mod money;
mod parse_datetime;
mod validate;

pub use self::logs::init_logger;
pub use self::money::{format_usd, round_cents};
pub use self::parse_datetime::parse_datetime;
pub use self::validate::validation_messages;
