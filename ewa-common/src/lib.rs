//! # EWA Common Library
//!
//! Shared code for the E-Waste Analyzer crates:
//! - Item categories emitted by the inference model
//! - Disposal reference data (collection centers and per-category guidance)
//! - Wire models shared by the API and the detection client
//! - Configuration loading
//! - SSE event helpers for the explanation relay

pub mod category;
pub mod config;
pub mod disposal;
pub mod error;
pub mod models;
pub mod sse;

pub use category::ItemCategory;
pub use disposal::{DisposalDirectory, DisposalRecord};
pub use error::{Error, Result};
