//! # Layer 0: Primitives
//!
//! Basic building blocks for the capability model:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).

pub mod bool;

// Re-export key types at this level
pub use bool::{Absent, Bool, Implies, IsPresent, Present};
