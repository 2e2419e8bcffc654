use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Attachment", inline)]
#[serde(default)]
/// Attached-prop asset and nudge increments.
pub struct AttachmentOptions {
    /// Host asset name for the attached prop.
    #[schemars(skip)]
    pub prop_asset: String,
    /// Position offset change per nudge, in world units.
    #[schemars(title = "Move Step", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub move_step: f32,
    /// Rotation offset change per nudge, in degrees.
    #[schemars(title = "Rotate Step", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub rotate_step: f32,
    /// Deadline in milliseconds for the prop asset to load at spawn.
    #[schemars(skip)]
    pub asset_timeout_ms: u64,
}

impl Default for AttachmentOptions {
    fn default() -> Self {
        Self {
            prop_asset: "handheld_torch".to_owned(),
            move_step: 0.01,
            rotate_step: 5.0,
            asset_timeout_ms: 5000,
        }
    }
}
