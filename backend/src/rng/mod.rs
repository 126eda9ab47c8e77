//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! Used only when a sample axis draws its own uniforms instead of receiving
//! them from the caller.

mod xorshift;

pub use xorshift::RngManager;
