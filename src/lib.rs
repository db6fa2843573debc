pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod retry;
pub mod service;
pub mod sink;
pub mod stats;
