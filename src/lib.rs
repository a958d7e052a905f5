// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod notify;
pub mod runner;
pub mod specs;
pub mod store;

pub use error::{ConfigError, DeliveryError, FetchError, WatchError};
