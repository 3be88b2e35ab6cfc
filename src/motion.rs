//! Per-frame motion: the triangle-wave slide and the keyframed swap cycle.

// --- Easing -----------------------------------------------------------------

/// One-dimensional cubic Bezier evaluated at `t` in `[0, 1]`.
pub fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u.powi(3) * p0 + 3.0 * u.powi(2) * t * p1 + 3.0 * u * t.powi(2) * p2 + t.powi(3) * p3
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => cubic_bezier(0.0, 1.0, 1.0, 1.0, t),
        }
    }
}

// --- Oscillator -------------------------------------------------------------

/// Triangle wave between `0` and `|x0|` with the given period (ms).
///
/// `0` at every multiple of `period`, `|x0|` at every odd half period.
pub fn triangle_wave(frame_time: f64, period: f64, x0: f64) -> f64 {
    let phase = frame_time / period;
    x0 * (2.0 * (phase - (phase + 0.5).floor())).abs()
}

/// Slides one position between x = 0 and `x0`, holding `y` fixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    pub x0: f64,
    pub y: f64,
    pub period: f64,
}

impl Oscillator {
    pub fn new(x0: f64, y: f64, period: f64) -> Self {
        Self { x0, y, period }
    }

    pub fn position(&self, frame_time: f64) -> (f64, f64) {
        (triangle_wave(frame_time, self.period, self.x0), self.y)
    }
}

// --- Swap timeline ----------------------------------------------------------

/// Keyframe states of the swap animation, in cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapState {
    Flat,
    ScaledOut,
    Swapped,
    Landed,
}

pub const SCALE_OUT_END_MS: f64 = 1000.0;
pub const SWAP_START_MS: f64 = 2000.0;
pub const SWAP_END_MS: f64 = 3000.0;
pub const LAND_START_MS: f64 = 5000.0;
pub const LAND_END_MS: f64 = 5500.0;
pub const SWAP_CYCLE_MS: f64 = 6000.0;
/// Peak scale while lifted.
pub const SWAP_SCALE: f64 = 2.0;

impl SwapState {
    /// Time within the cycle at which this state is entered.
    pub fn entered_at(self) -> f64 {
        match self {
            SwapState::Flat => 0.0,
            SwapState::ScaledOut => SCALE_OUT_END_MS,
            SwapState::Swapped => SWAP_END_MS,
            SwapState::Landed => LAND_END_MS,
        }
    }

    pub fn next(self) -> SwapState {
        match self {
            SwapState::Flat => SwapState::ScaledOut,
            SwapState::ScaledOut => SwapState::Swapped,
            SwapState::Swapped => SwapState::Landed,
            SwapState::Landed => SwapState::Flat,
        }
    }

    /// State reached at `cycle_time` ms into a cycle.
    pub fn at(cycle_time: f64) -> SwapState {
        let mut state = SwapState::Flat;
        while state.next() != SwapState::Flat && cycle_time >= state.next().entered_at() {
            state = state.next();
        }
        state
    }
}

/// Interpolated pose of the swapping pair at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwapFrame {
    pub state: SwapState,
    /// Completed cycles; odd cycles start from exchanged homes.
    pub cycle: u64,
    pub scale: f64,
    /// 0 = at home, 1 = at the partner's home.
    pub travel: f64,
    /// 0 = original opacity, 1 = fully opaque.
    pub lift: f64,
}

pub fn swap_frame(frame_time: f64) -> SwapFrame {
    let t = frame_time.max(0.0);
    let cycle = (t / SWAP_CYCLE_MS).floor();
    let ct = t - cycle * SWAP_CYCLE_MS;
    let lifted = SWAP_SCALE - 1.0;

    let (scale, travel, lift) = if ct < SCALE_OUT_END_MS {
        let k = Easing::EaseOut.apply(ct / SCALE_OUT_END_MS);
        (1.0 + lifted * k, 0.0, k)
    } else if ct < SWAP_START_MS {
        (SWAP_SCALE, 0.0, 1.0)
    } else if ct < SWAP_END_MS {
        let k = Easing::EaseOut.apply((ct - SWAP_START_MS) / (SWAP_END_MS - SWAP_START_MS));
        (SWAP_SCALE, k, 1.0)
    } else if ct < LAND_START_MS {
        (SWAP_SCALE, 1.0, 1.0)
    } else if ct < LAND_END_MS {
        let k = Easing::Linear.apply((ct - LAND_START_MS) / (LAND_END_MS - LAND_START_MS));
        (SWAP_SCALE - lifted * k, 1.0, 1.0 - k)
    } else {
        (1.0, 1.0, 0.0)
    };

    SwapFrame { state: SwapState::at(ct), cycle: cycle as u64, scale, travel, lift }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
