pub mod models;
pub mod seed;
pub mod store;
pub mod summary;
pub mod types;
pub mod view;
