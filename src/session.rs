//! Session context: everything the demo owns between startup and page unload.

use rand::Rng;

use crate::config::{DemoConfig, MotionMode};
use crate::error::DemoError;
use crate::grid::{self, Block, BlockId, Grid};
use crate::layer::{Layer, NodeId, RectNode, Surface};
use crate::motion::{self, Oscillator};
use crate::selection;

/// The two blocks raised above the rest and animated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChosenPair {
    pub moving: BlockId,
    pub target: BlockId,
    /// Original pixel positions captured at selection time.
    pub moving_home: (f64, f64),
    pub target_home: (f64, f64),
}

pub struct Session {
    config: DemoConfig,
    stage: (f64, f64),
    grid: Grid,
    blocks: Vec<Block>,
    layer: Layer,
    pair: Option<ChosenPair>,
    oscillator: Option<Oscillator>,
}

impl Session {
    /// Tile the viewport, build the layer and pick the animated pair.
    ///
    /// A layout with no equal-width pair is not fatal: the session renders a
    /// static tiling and `tick` does nothing.
    pub fn new<R: Rng>(config: DemoConfig, viewport_width: f64, viewport_height: f64, rng: &mut R) -> Result<Self, DemoError> {
        let (height, width) = config.grid_dims(viewport_width, viewport_height)?;
        let inset = config.stage_inset as f64;
        let stage = ((viewport_width - inset).max(0.0), (viewport_height - inset).max(0.0));

        let (grid, blocks) =
            grid::tile_with_opacity(height, width, config.max_block_number as usize, config.min_opacity, rng);
        crate::console_log!("tiled grid", height, width, "blocks:", blocks.len());

        let mut layer = Layer::new();
        for b in &blocks {
            let (x, y) = b.pixel_origin(config.block_length);
            let len = b.pixel_length(config.block_length);
            layer.add(RectNode::new(x, y, len, len, config.fill.clone(), b.opacity));
        }

        let mut session = Self { config, stage, grid, blocks, layer, pair: None, oscillator: None };
        match selection::choose_pair(&session.blocks, session.config.block_length, rng) {
            Ok((moving, target)) => session.select(moving, target),
            Err(DemoError::NoEligiblePair) => {
                crate::console_warn!("no equal-width pair; animation skipped");
            }
            Err(e) => return Err(e),
        }
        Ok(session)
    }

    fn node(id: BlockId) -> NodeId {
        NodeId(id.0) // block i is layer node i
    }

    /// Raise both blocks to the top and set up the configured motion.
    fn select(&mut self, moving: BlockId, target: BlockId) {
        self.layer.raise_to_top(Self::node(moving));
        self.layer.raise_to_top(Self::node(target));
        let moving_home = self.layer.position(Self::node(moving)).unwrap_or_default();
        let target_home = self.layer.position(Self::node(target)).unwrap_or_default();
        self.pair = Some(ChosenPair { moving, target, moving_home, target_home });
        self.oscillator = Some(Oscillator::new(target_home.0, moving_home.1, self.config.period_ms));
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn pair(&self) -> Option<&ChosenPair> {
        self.pair.as_ref()
    }

    /// Stage canvas size in pixels.
    pub fn stage_size(&self) -> (f64, f64) {
        self.stage
    }

    /// Advance the animation to `frame_time` ms since it started. Only the pair's
    /// layer nodes change; the grid and block list stay as tiled.
    pub fn tick(&mut self, frame_time: f64) {
        let Some(pair) = self.pair else { return };
        match self.config.motion {
            MotionMode::Oscillate => {
                if let Some(osc) = self.oscillator {
                    let (x, y) = osc.position(frame_time);
                    self.layer.set_position(Self::node(pair.moving), x, y);
                }
            }
            MotionMode::Swap => self.apply_swap(&pair, frame_time),
        }
    }

    fn apply_swap(&mut self, pair: &ChosenPair, frame_time: f64) {
        let frame = motion::swap_frame(frame_time);
        // odd cycles start from exchanged homes so the pair swaps back
        let (a_home, b_home) = if frame.cycle % 2 == 0 {
            (pair.moving_home, pair.target_home)
        } else {
            (pair.target_home, pair.moving_home)
        };
        let moves = [(pair.moving, a_home, b_home), (pair.target, b_home, a_home)];
        for (id, from, to) in moves {
            let base = self.blocks[id.0].opacity;
            if let Some(n) = self.layer.get_mut(Self::node(id)) {
                n.x = motion::lerp(from.0, to.0, frame.travel);
                n.y = motion::lerp(from.1, to.1, frame.travel);
                n.scale = frame.scale;
                n.opacity = motion::lerp(base, 1.0, frame.lift);
            }
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.stage.0, self.stage.1, &self.config.background);
        self.layer.render(surface);
    }
}
