pub mod config;
pub mod crd;
pub mod error;
pub mod gateway;
pub mod metrics;
pub mod store;
