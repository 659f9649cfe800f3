//! Animation and flash clock.
//!
//! One clock drives both effects: the A1 tile animation, which steps the
//! atlas sampling offset, and the flash pulse, a triangle wave on the blend
//! alpha of flashed cells. The clock is advanced once per game update, not
//! per rendered frame.

use crate::geom::Point;

/// Ticks per animation step.
const TICKS_PER_STEP: i32 = 30;

/// Ground tiles swing 0-1-2-1; waterfalls roll 0-1-2 continuously. Both
/// sequences share one 12-step period so the clock wraps cleanly.
const REGULAR_STEPS: [i32; 12] = [0, 1, 2, 1, 0, 1, 2, 1, 0, 1, 2, 1];
const WATERFALL_STEPS: [i32; 12] = [0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2];

const ANIMATION_PERIOD: i32 = TICKS_PER_STEP * REGULAR_STEPS.len() as i32;

/// Flash pulse period in ticks.
const FLASH_PERIOD: i32 = 32;

#[derive(Debug, Clone)]
pub struct AnimationClock {
    frame_index: i32,
    flash_timer: i32,
    flash_opacity: i32,
}

impl AnimationClock {
    /// A clock at rest. Flash opacity stays zero until the first tick.
    pub const fn new() -> Self {
        Self {
            frame_index: 0,
            flash_timer: 0,
            flash_opacity: 0,
        }
    }

    /// Advances the clock by one update tick.
    pub fn tick(&mut self) {
        self.frame_index += 1;
        if self.frame_index >= ANIMATION_PERIOD {
            self.frame_index = 0;
        }

        self.flash_timer = (self.flash_timer + 1) % FLASH_PERIOD;
        self.flash_opacity = (16 - self.flash_timer).abs() * 8 + 32;
    }

    /// Pixel offset added by the shader to animated atlas regions: `x`
    /// steps ground frames (two tiles apart), `y` steps waterfall frames
    /// (one tile apart).
    pub fn atlas_offset(&self, tile_size: i32) -> Point {
        let step = (self.frame_index / TICKS_PER_STEP) as usize;
        Point::new(
            REGULAR_STEPS[step] * 2 * tile_size,
            WATERFALL_STEPS[step] * tile_size,
        )
    }

    /// Current flash blend opacity, 0..=255.
    #[inline]
    pub const fn flash_opacity(&self) -> i32 {
        self.flash_opacity
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}
