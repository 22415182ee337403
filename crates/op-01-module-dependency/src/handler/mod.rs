//! Activation Command Handling
//!
//! Entry point used by the web layer when a clinic user toggles a module:
//! load catalog snapshots, ask the engine, persist only when permitted.

pub mod activation;
pub mod payloads;

pub use activation::ActivationHandler;
pub use payloads::*;
