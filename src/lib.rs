//! Sumfall (workspace facade crate).
//!
//! This package keeps the `sumfall::{core,adapter,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use sumfall_adapter as adapter;
pub use sumfall_core as core;
pub use sumfall_types as types;
