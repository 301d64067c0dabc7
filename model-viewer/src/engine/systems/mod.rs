/// Host page notifications for load progress, load state and hint dismissal.
pub mod load_notifications;

/// Viewport resize handling for the camera and output size.
pub mod viewport;
