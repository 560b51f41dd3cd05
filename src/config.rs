use serde::{Deserialize, Serialize};

/// Construction flags for [`crate::scalers::RobustScaler`].
///
/// Missing keys fall back to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalerConfig {
    /// Subtract the fitted median.
    pub center: bool,
    /// Divide by the fitted interquartile range.
    pub scale: bool,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            center: true,
            scale: true,
        }
    }
}
