//! # Shared Types Crate
//!
//! Identifier types used across the Ortho+ module subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `ModuleKey` and `TenantId` are defined here
//!   and nowhere else.
//! - **Validated at the edge**: a `ModuleKey` can only be obtained through
//!   construction-time validation, so the engine never re-checks key format.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
