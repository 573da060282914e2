//! Core types and trait definitions for the RetroBoard backend.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod board;
pub mod category;
pub mod error;
pub mod note;
pub mod setting;
pub mod store;

pub use error::{Error, Result};
