// Library for the binary and integration tests to access modules

pub mod app;
pub mod config;
pub mod history;
pub mod logger;
pub mod models;
pub mod render;
pub mod sampler;
pub mod units;
