//! Integration tests for the canvas numerics crates.
//!
//! These tests check properties that span several types: the memory
//! layout contract, dense rotation sweeps, parity with `glam`, and the
//! serialized field order.

#[cfg(test)]
mod sweep;
