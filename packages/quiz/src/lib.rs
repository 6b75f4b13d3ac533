pub mod exercise;
pub mod logging;
pub mod store;
