use bevy::prelude::*;

/// Latest progress reported for the model load.
///
/// Units are whatever the loader reports; only the ratio is meaningful.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct LoadingProgress {
    pub loaded: u64,
    pub total: u64,
}

impl LoadingProgress {
    /// Completion in percent, or `None` before the first report.
    pub fn percent(&self) -> Option<f32> {
        if self.total == 0 {
            return None;
        }
        Some(self.loaded as f32 / self.total as f32 * 100.0)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "loaded": self.loaded,
            "total": self.total,
            "percent": self.percent(),
        })
    }
}
