//! One-shot scene configuration performed at startup.

/// Ambient and directional lights.
pub mod lighting;
