//! Shared utilities.

mod hash;

pub use hash::structural_hash;
