//! Environment capabilities injected into the engine.
//!
//! The core never reaches for ambient randomness; every roll goes through an
//! [`RngOracle`] handed in by the caller.
mod rng;

pub use rng::{PcgRng, RngOracle, ScriptedRng};
