//! On-screen overlays driven by the load lifecycle.

/// Loading indicator and interaction hint.
pub mod overlays;
