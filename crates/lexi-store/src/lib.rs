pub mod state;
pub mod store;

pub use state::{LookupState, Phase};
pub use store::LookupStore;
