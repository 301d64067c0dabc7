//! Fixed configuration shared by the model viewer.
//!
//! Values are grouped by the concern that reads them. The viewer assembles
//! them into a single `ViewerConfig` resource at startup.

/// Model asset location and placement.
pub mod asset;

/// Perspective camera and orbit control tuning.
pub mod camera;

/// Scene lighting.
pub mod lighting;

/// Loading indicator and interaction hint overlays.
pub mod overlay;
