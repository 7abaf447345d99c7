pub mod guild;
pub mod parameters;
pub mod store;

pub use guild::GuildSettings;
pub use store::GuildStore;
