//! Shared utilities for the rig.
//!
//! Currently just the wrap-safe angle interpolation helpers every
//! component's rotation math goes through.

pub mod angle;
