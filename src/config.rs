//! Demo configuration. Every field has a default matching the classic layout
//! (30px cells, blocks up to 4x4, 3 second slide period).

use crate::error::DemoError;

/// Max side length of a single grid cell, in pixels.
pub const DEFAULT_BLOCK_LENGTH: u32 = 30;
/// Max side length of a composite block, in cells.
pub const DEFAULT_MAX_BLOCK_NUMBER: u32 = 4;
pub const DEFAULT_PERIOD_MS: f64 = 3000.0;
pub const DEFAULT_MIN_OPACITY: f64 = 0.1;

/// Which animation runs once a pair has been chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MotionMode {
    /// Triangle-wave slide of the first block between x = 0 and the second block's x.
    #[default]
    Oscillate,
    /// Keyframed scale-out / swap / land cycle.
    Swap,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DemoConfig {
    pub block_length: u32,
    pub max_block_number: u32,
    pub period_ms: f64,
    pub min_opacity: f64,
    pub fill: String,
    pub background: String,
    /// Pixels trimmed from the viewport when sizing the stage canvas.
    pub stage_inset: u32,
    /// Element id the stage canvas is mounted into (falls back to `<body>`).
    pub container_id: String,
    pub motion: MotionMode,
    /// Fixed seed for a reproducible layout; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            block_length: DEFAULT_BLOCK_LENGTH,
            max_block_number: DEFAULT_MAX_BLOCK_NUMBER,
            period_ms: DEFAULT_PERIOD_MS,
            min_opacity: DEFAULT_MIN_OPACITY,
            fill: "green".to_string(),
            background: "white".to_string(),
            stage_inset: 2,
            container_id: "demo".to_string(),
            motion: MotionMode::Oscillate,
            seed: None,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<(), DemoError> {
        if self.block_length == 0 {
            return Err(DemoError::invalid("block_length must be positive"));
        }
        if self.max_block_number == 0 {
            return Err(DemoError::invalid("max_block_number must be positive"));
        }
        if !self.period_ms.is_finite() || self.period_ms <= 0.0 {
            return Err(DemoError::invalid(format!(
                "period_ms must be a positive number, got {}",
                self.period_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.min_opacity) {
            return Err(DemoError::invalid(format!(
                "min_opacity must lie in [0, 1], got {}",
                self.min_opacity
            )));
        }
        if self.fill.trim().is_empty() {
            return Err(DemoError::invalid("fill colour is empty"));
        }
        Ok(())
    }

    /// Grid dimensions `(height, width)` in cells for a viewport in pixels.
    pub fn grid_dims(&self, viewport_width: f64, viewport_height: f64) -> Result<(usize, usize), DemoError> {
        self.validate()?;
        if !(viewport_width.is_finite() && viewport_height.is_finite()) {
            return Err(DemoError::invalid("viewport size is not finite"));
        }
        let len = self.block_length as f64;
        let height = (viewport_height / len).floor().max(0.0) as usize;
        let width = (viewport_width / len).floor().max(0.0) as usize;
        if height == 0 || width == 0 {
            return Err(DemoError::invalid(format!(
                "viewport {}x{} cannot hold a {}px block",
                viewport_width, viewport_height, self.block_length
            )));
        }
        Ok((height, width))
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, DemoError> {
        let cfg: DemoConfig =
            serde_json::from_str(json).map_err(|e| DemoError::invalid(format!("bad config json: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
