//! Card entrance animation.
//!
//! The math is a pure time → [`Frame`] function ([`Tween::sample`]); hosts
//! call it from whatever tick they have (the terminal app samples once per
//! redraw). Whether cards animate at all is decided by the [`Animator`]
//! handed to the search flow at construction.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::surface::Surface;

/// Entrance duration of a single card.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(600);

/// Extra start delay per card index.
pub const STAGGER: Duration = Duration::from_millis(120);

/// Visual state of a card at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f32,
    /// Downward displacement from the resting position.
    pub offset_y: f32,
}

impl Frame {
    pub const HIDDEN: Frame = Frame {
        opacity: 0.0,
        offset_y: 20.0,
    };

    pub const VISIBLE: Frame = Frame {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Linearly interpolate between two frames.
    pub fn lerp(self, to: Frame, t: f32) -> Frame {
        Frame {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
        }
    }
}

/// Timing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
}

impl Easing {
    /// Maps linear progress `t` (clamped to 0..=1) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => ease_out(t),
        }
    }
}

/// Quadratic ease-out: fast start, decelerating to the end value.
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv
}

/// A delayed transition between two frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Frame,
    pub to: Frame,
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    /// A tween that is already at `frame` and never moves.
    pub fn settled(frame: Frame) -> Self {
        Self {
            from: frame,
            to: frame,
            delay: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Frame at `elapsed` time since the tween was started.
    pub fn sample(&self, elapsed: Duration) -> Frame {
        if elapsed < self.delay {
            return self.from;
        }
        let active = elapsed - self.delay;
        if active >= self.duration {
            return self.to;
        }
        let t = active.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, self.easing.apply(t))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// A tween anchored at the instant it was started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub tween: Tween,
    pub started: Instant,
}

impl Entrance {
    pub fn new(tween: Tween, started: Instant) -> Self {
        Self { tween, started }
    }

    /// Entrance already at the visible end state.
    pub fn settled(started: Instant) -> Self {
        Self::new(Tween::settled(Frame::VISIBLE), started)
    }

    pub fn frame_at(&self, now: Instant) -> Frame {
        self.tween.sample(now.saturating_duration_since(self.started))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.tween
            .is_finished(now.saturating_duration_since(self.started))
    }
}

/// Capability that reveals freshly rendered cards.
pub trait Animator: Send + Sync {
    /// Plans an entrance for every card currently on `surface`.
    fn animate(&self, surface: &mut dyn Surface, now: Instant);
}

/// Returns the animating implementation when `enabled`, the no-op otherwise.
pub fn animator(enabled: bool) -> Box<dyn Animator> {
    if enabled {
        Box::new(Staggered::default())
    } else {
        Box::new(Disabled)
    }
}

/// Fade/slide-in with a per-index start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Staggered {
    pub from: Frame,
    pub to: Frame,
    pub duration: Duration,
    pub stagger: Duration,
    pub easing: Easing,
}

impl Default for Staggered {
    fn default() -> Self {
        Self {
            from: Frame::HIDDEN,
            to: Frame::VISIBLE,
            duration: ENTRANCE_DURATION,
            stagger: STAGGER,
            easing: Easing::EaseOut,
        }
    }
}

impl Staggered {
    /// Tween for the card at `index`.
    pub fn tween_for(&self, index: usize) -> Tween {
        Tween {
            from: self.from,
            to: self.to,
            delay: self.stagger * index as u32,
            duration: self.duration,
            easing: self.easing,
        }
    }
}

impl Animator for Staggered {
    fn animate(&self, surface: &mut dyn Surface, now: Instant) {
        for index in 0..surface.card_count() {
            surface.set_entrance(index, Entrance::new(self.tween_for(index), now));
        }
    }
}

/// Used when animation is unavailable: cards are shown at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disabled;

impl Animator for Disabled {
    fn animate(&self, surface: &mut dyn Surface, now: Instant) {
        let count = surface.card_count();
        warn!(
            cards = count,
            "animation not available, showing cards without animation"
        );
        for index in 0..count {
            surface.set_entrance(index, Entrance::settled(now));
        }
    }
}
