pub mod show;
pub mod store;
