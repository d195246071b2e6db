use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::transition::Easing;
use crate::trigger::Tint;

const DEFAULT_MAX_OVERLAY_ALPHA: f32 = 0.3;
const DEFAULT_ANIMATION_DURATION_MS: u64 = 250;
const DEFAULT_EDGE_ZONE: f32 = 30.0;
const DEFAULT_DRAG_THRESHOLD: f32 = 10.0;
const DEFAULT_FLICK_WINDOW_MS: u64 = 200;
const DEFAULT_TRIGGER_SIZE: f32 = 44.0;

/// Interaction tuning and trigger tint for a [`HostController`].
///
/// Every field has a default, so partial JSON documents deserialize into a
/// complete value.
///
/// [`HostController`]: crate::HostController
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Overlay alpha when the panel is fully open.
    pub max_overlay_alpha: f32,
    /// Duration of open, close and cross-fade animations.
    pub animation_duration_ms: u64,
    /// Width of the leading edge strip that starts an edge swipe.
    pub edge_zone: f32,
    /// Horizontal travel before an edge swipe mounts the panel.
    pub drag_threshold: f32,
    /// Releases faster than this after touch-down always close.
    pub flick_window_ms: u64,
    pub trigger_size: f32,
    pub trigger_tint: Tint,
    pub easing: Easing,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_overlay_alpha: DEFAULT_MAX_OVERLAY_ALPHA,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            edge_zone: DEFAULT_EDGE_ZONE,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            flick_window_ms: DEFAULT_FLICK_WINDOW_MS,
            trigger_size: DEFAULT_TRIGGER_SIZE,
            trigger_tint: Tint::WHITE,
            easing: Easing::EaseInOut,
        }
    }
}

impl Settings {
    pub fn with_max_overlay_alpha(mut self, alpha: f32) -> Self {
        self.max_overlay_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration_ms =
            u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_edge_zone(mut self, edge_zone: f32) -> Self {
        self.edge_zone = edge_zone.max(0.0);
        self
    }

    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold.max(0.0);
        self
    }

    pub fn with_flick_window(mut self, window: Duration) -> Self {
        self.flick_window_ms =
            u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_trigger_tint(mut self, tint: Tint) -> Self {
        self.trigger_tint = tint;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    pub fn flick_window(&self) -> Duration {
        Duration::from_millis(self.flick_window_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_read_then_interaction_constants_match() {
        let settings = Settings::default();

        assert_eq!(settings.max_overlay_alpha, 0.3);
        assert_eq!(settings.animation_duration(), Duration::from_millis(250));
        assert_eq!(settings.edge_zone, 30.0);
        assert_eq!(settings.drag_threshold, 10.0);
        assert_eq!(settings.flick_window(), Duration::from_millis(200));
        assert_eq!(settings.trigger_size, 44.0);
        assert_eq!(settings.trigger_tint, Tint::WHITE);
    }

    #[test]
    fn given_partial_json_when_deserialized_then_missing_fields_use_defaults()
    {
        let settings: Settings = serde_json::from_str(
            r#"{ "animation_duration_ms": 400, "easing": "Linear" }"#,
        )
        .expect("settings json");

        assert_eq!(settings.animation_duration(), Duration::from_millis(400));
        assert_eq!(settings.easing, Easing::Linear);
        assert_eq!(settings.edge_zone, 30.0);
    }

    #[test]
    fn given_huge_durations_when_set_then_milliseconds_saturate() {
        let settings = Settings::default()
            .with_animation_duration(Duration::MAX)
            .with_flick_window(Duration::MAX);

        assert_eq!(settings.animation_duration_ms, u64::MAX);
        assert_eq!(settings.flick_window_ms, u64::MAX);
    }

    #[test]
    fn given_out_of_range_alpha_when_set_then_it_is_clamped() {
        let settings = Settings::default().with_max_overlay_alpha(4.0);
        assert_eq!(settings.max_overlay_alpha, 1.0);
    }
}
