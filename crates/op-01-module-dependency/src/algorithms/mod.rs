//! Algorithms module for Module Dependency
//!
//! Contains:
//! - Activation/deactivation gating (direct edges only)
//! - Post-order DFS activation and deactivation sequencing
//! - Three-color DFS cycle detection

pub mod cycles;
pub mod gating;
pub mod sequence;

pub use cycles::validate_graph;
pub use gating::{can_activate, can_deactivate};
pub use sequence::{activation_sequence, deactivation_sequence, strict_activation_sequence};
