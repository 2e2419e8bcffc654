use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Field-of-view bounds, step sizes, and initial ease rates.
pub struct ZoomOptions {
    /// FOV in degrees the reset chord snaps to.
    #[schemars(title = "Default FOV", range(min = 10.0, max = 90.0), extend("step" = 1.0))]
    pub default_fov: f32,
    /// Smallest FOV reachable (maximum zoom in).
    #[schemars(skip)]
    pub min_fov: f32,
    /// Largest FOV reachable (maximum zoom out).
    #[schemars(skip)]
    pub max_fov: f32,
    /// FOV change per discrete scroll notch. Continuous mode applies
    /// half of this per held frame.
    #[schemars(title = "Zoom Step", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub step: f32,
    /// Initial ease rate while the FOV is decreasing (zooming in).
    #[schemars(title = "Ease In", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub ease_in: f32,
    /// Initial ease rate while the FOV is increasing (zooming out).
    #[schemars(title = "Ease Out", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub ease_out: f32,
    /// Ease-rate change per modifier-qualified scroll notch.
    #[schemars(skip)]
    pub ease_step: f32,
    /// Ease-rate change per frame of a modifier-qualified hold.
    #[schemars(skip)]
    pub ease_step_held: f32,
    /// Lower clamp for both ease rates.
    #[schemars(skip)]
    pub ease_min: f32,
    /// Upper clamp for both ease rates.
    #[schemars(skip)]
    pub ease_max: f32,
    /// Start in continuous (press-and-hold) mode instead of discrete.
    #[schemars(title = "Continuous Mode")]
    pub continuous: bool,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            default_fov: 68.0,
            min_fov: 10.0,
            max_fov: 90.0,
            step: 2.0,
            ease_in: 0.15,
            ease_out: 0.15,
            ease_step: 0.02,
            ease_step_held: 0.001,
            ease_min: 0.01,
            ease_max: 1.0,
            continuous: false,
        }
    }
}

impl ZoomOptions {
    /// Clamp a FOV value into the configured range.
    #[must_use]
    pub fn clamp_fov(&self, fov: f32) -> f32 {
        fov.clamp(self.min_fov, self.max_fov)
    }

    /// Clamp an ease rate into the configured range.
    #[must_use]
    pub fn clamp_ease(&self, ease: f32) -> f32 {
        ease.clamp(self.ease_min, self.ease_max)
    }
}
