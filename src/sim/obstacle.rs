//! Paired top/bottom obstacles sharing one vertical gap

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// One spawned obstacle pair.
///
/// Both members are `height` tall; the top one hangs down to `gap_top`
/// and the bottom one starts at `gap_bottom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: u32,
    /// Left edge, decreases every tick
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    /// Set once the actor has cleared the trailing edge
    pub passed: bool,
}

impl ObstaclePair {
    pub fn new(id: u32, x: f32, width: f32, height: f32, gap_top: f32, gap_bottom: f32) -> Self {
        Self {
            id,
            x,
            width,
            height,
            gap_top,
            gap_bottom,
            passed: false,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_top - self.height, self.width, self.height)
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_bottom, self.width, self.height)
    }

    /// Scroll left by `speed` units
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Mark as passed if the trailing edge is left of `actor_x`.
    ///
    /// Returns true only on the tick the flag flips.
    pub fn check_pass(&mut self, actor_x: f32) -> bool {
        if !self.passed && self.right() < actor_x {
            self.passed = true;
            return true;
        }
        false
    }

    pub fn hits(&self, actor: &Rect) -> bool {
        actor.intersects(&self.top_rect()) || actor.intersects(&self.bottom_rect())
    }

    /// True once the pair has scrolled fully out past the left margin
    pub fn is_expired(&self, margin: f32) -> bool {
        self.right() < -margin
    }
}
