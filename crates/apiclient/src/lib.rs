pub mod abstract_trait;
pub mod client;
pub mod presence;
