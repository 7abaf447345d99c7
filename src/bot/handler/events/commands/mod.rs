pub mod filters;
pub mod forget;
pub mod model;
pub mod parameters;
pub mod percent;
pub mod settings;
pub mod whitelist;
