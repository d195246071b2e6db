use serde::{Deserialize, Serialize};

use crate::geometry::TriggerOffsets;

/// Accessibility label carried by every trigger.
pub const TRIGGER_ACCESSIBILITY_LABEL: &str = "menuButton";

/// Straight RGBA tint in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Tint {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Capabilities shared by every trigger placement.
pub trait TriggerControl {
    fn tint(&self) -> Tint;
    fn set_tint(&mut self, tint: Tint);
    /// Detach the trigger from the screen it was installed on.
    fn remove_from_parent(&mut self);
    fn is_attached(&self) -> bool;
}

/// Trigger installed as the leading item of a visible navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarTrigger {
    tint: Tint,
    attached: bool,
}

impl BarTrigger {
    pub fn new(tint: Tint) -> Self {
        Self {
            tint,
            attached: true,
        }
    }
}

impl TriggerControl for BarTrigger {
    fn tint(&self) -> Tint {
        self.tint
    }

    fn set_tint(&mut self, tint: Tint) {
        self.tint = tint;
    }

    fn remove_from_parent(&mut self) {
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Square trigger pinned near the top-leading corner of the active screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingTrigger {
    tint: Tint,
    size: f32,
    offsets: TriggerOffsets,
    attached: bool,
}

impl FloatingTrigger {
    pub fn new(tint: Tint, size: f32, offsets: TriggerOffsets) -> Self {
        Self {
            tint,
            size,
            offsets,
            attached: true,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn offsets(&self) -> TriggerOffsets {
        self.offsets
    }

    pub(crate) fn set_offsets(&mut self, offsets: TriggerOffsets) {
        self.offsets = offsets;
    }
}

impl TriggerControl for FloatingTrigger {
    fn tint(&self) -> Tint {
        self.tint
    }

    fn set_tint(&mut self, tint: Tint) {
        self.tint = tint;
    }

    fn remove_from_parent(&mut self) {
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

/// The installed trigger, by placement.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    Bar(BarTrigger),
    Floating(FloatingTrigger),
}

impl Trigger {
    pub fn accessibility_label(&self) -> &'static str {
        TRIGGER_ACCESSIBILITY_LABEL
    }

    pub fn as_floating(&self) -> Option<&FloatingTrigger> {
        match self {
            Trigger::Floating(trigger) => Some(trigger),
            Trigger::Bar(_) => None,
        }
    }

    pub fn is_bar(&self) -> bool {
        matches!(self, Trigger::Bar(_))
    }

    fn control(&self) -> &dyn TriggerControl {
        match self {
            Trigger::Bar(trigger) => trigger,
            Trigger::Floating(trigger) => trigger,
        }
    }

    fn control_mut(&mut self) -> &mut dyn TriggerControl {
        match self {
            Trigger::Bar(trigger) => trigger,
            Trigger::Floating(trigger) => trigger,
        }
    }
}

impl TriggerControl for Trigger {
    fn tint(&self) -> Tint {
        self.control().tint()
    }

    fn set_tint(&mut self, tint: Tint) {
        self.control_mut().set_tint(tint);
    }

    fn remove_from_parent(&mut self) {
        self.control_mut().remove_from_parent();
    }

    fn is_attached(&self) -> bool {
        self.control().is_attached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_each_variant_when_tint_changes_then_capability_applies_it() {
        let red = Tint::rgb(1.0, 0.0, 0.0);
        let mut triggers = [
            Trigger::Bar(BarTrigger::new(Tint::WHITE)),
            Trigger::Floating(FloatingTrigger::new(
                Tint::WHITE,
                44.0,
                TriggerOffsets::DEFAULT,
            )),
        ];

        for trigger in &mut triggers {
            trigger.set_tint(red);
            assert_eq!(trigger.tint(), red);
        }
    }

    #[test]
    fn given_floating_trigger_when_removed_then_it_reports_detached() {
        let mut trigger = Trigger::Floating(FloatingTrigger::new(
            Tint::WHITE,
            44.0,
            TriggerOffsets::DEFAULT,
        ));
        assert!(trigger.is_attached());

        trigger.remove_from_parent();

        assert!(!trigger.is_attached());
        assert_eq!(trigger.accessibility_label(), "menuButton");
    }
}
