use slidemenu::{
    HostController, PanelRow, PanelShadow, PresentationState, Screen, Tint,
    Trigger, TriggerControl, TriggerOffsets,
};

/// Read-only snapshot of the mounted panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelViewModel {
    pub title: &'static str,
    pub rows: Vec<PanelRow>,
    pub row_height: f32,
    pub width: f32,
    /// Leading offset in `[-width, 0]`.
    pub offset: f32,
    pub shadow: Option<PanelShadow>,
}

impl PanelViewModel {
    /// Width of the part of the panel currently on screen.
    pub fn visible_width(&self) -> f32 {
        (self.width + self.offset).clamp(0.0, self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerPlacement {
    Bar,
    Floating { size: f32, offsets: TriggerOffsets },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerViewModel {
    pub tint: Tint,
    pub placement: TriggerPlacement,
    pub label: &'static str,
}

impl TriggerViewModel {
    fn from_trigger(trigger: &Trigger) -> Self {
        let placement = match trigger.as_floating() {
            Some(floating) => TriggerPlacement::Floating {
                size: floating.size(),
                offsets: floating.offsets(),
            },
            None => TriggerPlacement::Bar,
        };
        Self {
            tint: trigger.tint(),
            placement,
            label: trigger.accessibility_label(),
        }
    }
}

/// Read-only view model for the slide menu presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideMenuViewModel {
    pub phase: PresentationState,
    pub panel: Option<PanelViewModel>,
    pub overlay_alpha: Option<f32>,
    pub trigger: Option<TriggerViewModel>,
    pub screen_alpha: f32,
    pub outgoing_alpha: Option<f32>,
}

impl SlideMenuViewModel {
    pub(crate) fn from_host<S: Screen>(host: &HostController<S>) -> Self {
        let panel = host.panel().zip(host.panel_offset()).map(
            |(panel, offset)| PanelViewModel {
                title: panel.title(),
                rows: panel.rows().to_vec(),
                row_height: panel.row_height(),
                width: host.panel_width(),
                offset,
                shadow: panel.shadow(),
            },
        );

        Self {
            phase: host.phase(),
            panel,
            overlay_alpha: host.overlay_alpha(),
            trigger: host.trigger().map(TriggerViewModel::from_trigger),
            screen_alpha: host.screen_alpha(),
            outgoing_alpha: host.outgoing_screen().map(|(_, alpha)| alpha),
        }
    }
}
