pub mod initialize;
pub mod store;

pub use store::WorkLogStore;
