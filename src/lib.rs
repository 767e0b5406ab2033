//! aqdash-rs: workspace facade over [`aqdash_core`].
//!
//! Re-exports the core crate so the demos can `use aqdash_rs::prelude::*`.

pub use aqdash_core::*;
