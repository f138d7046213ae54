//! Lobus Core: shared abstractions.
//!
//! This crate defines the seams every other crate in the bundle talks
//! through: the line channel a participant replies on, the presenter that
//! writes text back, the clock, and the domain error type. It contains no
//! transport code beyond adapters over tokio primitives.

pub mod channel;
pub mod clock;
pub mod error;
pub mod present;
pub mod repository;
