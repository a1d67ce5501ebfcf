//! Banner screen animation state

use std::time::{Duration, Instant};

/// Animation phase for the banner screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    /// Banner sliding up into place
    SlideIn,
    /// Animation finished, waiting for the user
    Ready,
}

/// Banner screen animation state
#[derive(Debug)]
pub struct BannerState {
    /// When the animation started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: BannerPhase,
    /// Rows the banner is still below its resting position
    pub slide_offset: f32,
}

impl BannerState {
    /// Duration of the slide-in animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(700);

    /// Start the slide-in animation, or skip straight to ready
    pub fn new(animate: bool) -> Self {
        Self {
            start_time: Instant::now(),
            phase: if animate {
                BannerPhase::SlideIn
            } else {
                BannerPhase::Ready
            },
            slide_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, terminal_height: u16) {
        if self.phase == BannerPhase::Ready {
            return;
        }

        let elapsed = self.start_time.elapsed();
        if elapsed < Self::ANIMATION_DURATION {
            let progress = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out: fast start, gentle landing
            let eased = simple_easing::cubic_out(progress);
            self.slide_offset = (1.0 - eased) * (terminal_height as f32 / 2.0);
        } else {
            self.skip();
        }
    }

    /// Jump to the end of the animation (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = BannerPhase::Ready;
        self.slide_offset = 0.0;
    }

    /// Check if the animation is over
    pub fn is_ready(&self) -> bool {
        self.phase == BannerPhase::Ready
    }
}
