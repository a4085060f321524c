pub mod store;
pub mod types;

pub use store::FoodJournal;
pub use types::{Food, FoodKind};
