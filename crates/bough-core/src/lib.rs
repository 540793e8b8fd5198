#![forbid(unsafe_code)]
//! bough-core library.
//!
//! # Conventions
//!
//! - **Errors**: Each failure domain has a `thiserror` enum that maps to an
//!   [`error::ErrorCode`]; configuration loading uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod dict;
pub mod error;
pub mod linkage;
pub mod text;

pub use dict::{FrequencyDictionary, WordFrequency};
pub use error::ErrorCode;
pub use linkage::Linkage;
