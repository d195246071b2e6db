use std::time::{Duration, Instant};

use crate::geometry::Point;

/// Where a released panel settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snap {
    Open,
    Closed,
}

/// Interactive touch sequence being tracked by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchTracking {
    pub start: Point,
    pub started_at: Instant,
    /// Panel offset when the drag began: `-width` from closed, `0` from open.
    pub origin_offset: f32,
    /// Horizontal displacement of the last processed move.
    pub delta_x: f32,
    pub last: Point,
}

impl TouchTracking {
    pub fn new(start: Point, started_at: Instant, origin_offset: f32) -> Self {
        Self {
            start,
            started_at,
            origin_offset,
            delta_x: 0.0,
            last: start,
        }
    }

    /// Record a move and return its displacement from the start point.
    pub fn update(&mut self, point: Point) -> f32 {
        self.last = point;
        self.delta_x = point.x - self.start.x;
        self.delta_x
    }

    /// Panel offset that keeps the panel under the finger.
    pub fn drag_offset(&self, panel_width: f32) -> f32 {
        clamp_offset(self.origin_offset + self.delta_x, panel_width)
    }
}

/// Clamp a leading offset to the mounted range `[-width, 0]`.
pub fn clamp_offset(offset: f32, panel_width: f32) -> f32 {
    offset.clamp(-panel_width.max(0.0), 0.0)
}

/// Normalised openness for an offset, clamped to `[0, 1]`.
pub fn reveal_fraction(offset: f32, panel_width: f32) -> f32 {
    if panel_width <= 0.0 {
        return 0.0;
    }
    ((panel_width + offset) / panel_width).clamp(0.0, 1.0)
}

/// Commit-or-cancel decision for a released drag.
pub fn decide_release(
    tracking: &TouchTracking,
    released: Point,
    released_at: Instant,
    panel_width: f32,
    flick_window: Duration,
) -> Snap {
    let held = released_at.saturating_duration_since(tracking.started_at);
    if held < flick_window {
        return Snap::Closed;
    }
    if released.x == tracking.start.x {
        return Snap::Closed;
    }
    // Only the on-screen band left of the midpoint cancels; a release at or
    // past the leading edge commits like one beyond the panel.
    if released.x > 0.0 && released.x < panel_width / 2.0 {
        return Snap::Closed;
    }
    Snap::Open
}
