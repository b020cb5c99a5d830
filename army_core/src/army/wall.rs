//! WallLevel - Defender wall stage (0-3)

use super::CompositionError;
use serde::{Deserialize, Serialize};

/// Highest buildable wall stage
pub const MAX_WALL_LEVEL: u8 = 3;

/// Validated wall stage in `0..=3`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WallLevel(u8);

impl WallLevel {
    pub const NONE: WallLevel = WallLevel(0);

    pub fn new(level: u8) -> Result<Self, CompositionError> {
        if level > MAX_WALL_LEVEL {
            return Err(CompositionError::InvalidWallLevel(level));
        }
        Ok(WallLevel(level))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Hit point multiplier: `1 - per_level * level`.
    ///
    /// With the default 0.3 per level, stage 3 leaves 10% of hit points.
    pub fn hp_factor(&self, per_level: f64) -> f64 {
        1.0 - per_level * f64::from(self.0)
    }
}

impl TryFrom<u8> for WallLevel {
    type Error = CompositionError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        WallLevel::new(level)
    }
}

impl From<WallLevel> for u8 {
    fn from(level: WallLevel) -> Self {
        level.0
    }
}
