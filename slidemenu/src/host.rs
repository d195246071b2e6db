use std::time::Instant;

use crate::error::SlideMenuError;
use crate::geometry::{
    self, DeviceClass, Point, Size, TraitCollection, TriggerOffsets,
};
use crate::gesture::{self, Snap, TouchTracking};
use crate::model::{MenuItem, MenuListModel};
use crate::panel::{MenuPanel, PanelSelection};
use crate::screen::{Screen, ScreenFactory, topmost_screen};
use crate::settings::Settings;
use crate::transition::Tween;
use crate::trigger::{
    BarTrigger, FloatingTrigger, Tint, Trigger, TriggerControl,
};

/// Callback run once a programmatic close has torn the panel down.
pub type Completion = Box<dyn FnOnce()>;

/// Receives menu selections made by the user.
pub trait MenuDelegate {
    fn did_select_item(&mut self, item: &MenuItem);
}

impl<F> MenuDelegate for F
where
    F: FnMut(&MenuItem),
{
    fn did_select_item(&mut self, item: &MenuItem) {
        self(item)
    }
}

/// Presentation state of the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresentationState {
    #[default]
    Closed,
    OpeningAnimated,
    Open,
    ClosingAnimated,
    DraggingOpen,
    DraggingClosed,
}

/// Settled outcomes reported to the embedding UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum HostNotice {
    PanelOpened,
    PanelClosed,
    ItemSelected(MenuItem),
    ScreenSwapped,
}

#[derive(Debug)]
struct MountedPanel {
    panel: MenuPanel,
    offset: f32,
    overlay_alpha: f32,
}

#[derive(Debug, Clone, Copy)]
struct PanelAnimation {
    offset: Tween,
    alpha: Tween,
    snap: Snap,
}

struct ScreenSwap<S> {
    outgoing: S,
    fade: Tween,
    incoming_alpha: f32,
}

/// Owns the panel, the overlay, the active screen and the trigger, and
/// drives them from taps, touches, selections and size changes.
pub struct HostController<S> {
    settings: Settings,
    model: MenuListModel,
    factory: Box<dyn ScreenFactory<S>>,
    delegate: Option<Box<dyn MenuDelegate>>,
    selected_index: Option<usize>,
    bounds: Size,
    traits: TraitCollection,
    device: DeviceClass,
    phase: PresentationState,
    panel: Option<MountedPanel>,
    animation: Option<PanelAnimation>,
    tracking: Option<TouchTracking>,
    current: Option<S>,
    swap: Option<ScreenSwap<S>>,
    trigger: Option<Trigger>,
    close_completions: Vec<Completion>,
    notices: Vec<HostNotice>,
}

impl<S: Screen> HostController<S> {
    pub fn new(
        settings: Settings,
        factory: impl ScreenFactory<S> + 'static,
    ) -> Self {
        Self {
            settings,
            model: MenuListModel::new(),
            factory: Box::new(factory),
            delegate: None,
            selected_index: Some(0),
            bounds: Size::ZERO,
            traits: TraitCollection::default(),
            device: DeviceClass::default(),
            phase: PresentationState::Closed,
            panel: None,
            animation: None,
            tracking: None,
            current: None,
            swap: None,
            trigger: None,
            close_completions: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn set_delegate(&mut self, delegate: impl MenuDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn add_item(&mut self, item: MenuItem) {
        self.model.add_item(item);
    }

    pub fn add_items(&mut self, items: impl IntoIterator<Item = MenuItem>) {
        self.model.add_items(items);
    }

    pub fn model(&self) -> &MenuListModel {
        &self.model
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Pre-select a row for the next presentation.
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    /// Change the trigger tint, recolouring an installed trigger at once.
    pub fn set_trigger_tint(&mut self, tint: Tint) {
        self.settings.trigger_tint = tint;
        if let Some(trigger) = self.trigger.as_mut() {
            trigger.set_tint(tint);
        }
    }

    pub fn phase(&self) -> PresentationState {
        self.phase
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn traits(&self) -> TraitCollection {
        self.traits
    }

    pub fn device_class(&self) -> DeviceClass {
        self.device
    }

    /// Open width of the panel for the current bounds and device class.
    pub fn panel_width(&self) -> f32 {
        geometry::panel_width(self.device, self.bounds)
    }

    pub fn panel(&self) -> Option<&MenuPanel> {
        self.panel.as_ref().map(|mounted| &mounted.panel)
    }

    /// Leading offset of the mounted panel, `-panel_width` when hidden.
    pub fn panel_offset(&self) -> Option<f32> {
        self.panel.as_ref().map(|mounted| mounted.offset)
    }

    pub fn reveal_fraction(&self) -> f32 {
        self.panel
            .as_ref()
            .map(|mounted| {
                gesture::reveal_fraction(mounted.offset, self.panel_width())
            })
            .unwrap_or(0.0)
    }

    /// Overlay alpha, or `None` when no overlay is installed.
    pub fn overlay_alpha(&self) -> Option<f32> {
        self.panel.as_ref().map(|mounted| mounted.overlay_alpha)
    }

    pub fn trigger(&self) -> Option<&Trigger> {
        self.trigger.as_ref()
    }

    pub fn current_screen(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Mutate the active screen, then re-place the trigger.
    ///
    /// Changing a container's active child (a tab switch, a push onto a
    /// navigation stack) can move the topmost screen in or out of a visible
    /// navigation bar, so placement is recomputed afterwards.
    pub fn update_current_screen<R>(
        &mut self,
        update: impl FnOnce(&mut S) -> R,
    ) -> Option<R> {
        let result = self.current.as_mut().map(update)?;
        self.install_trigger();
        Some(result)
    }

    /// Opacity of the active screen; below `1.0` only during a cross-fade.
    pub fn screen_alpha(&self) -> f32 {
        self.swap
            .as_ref()
            .map(|swap| swap.incoming_alpha)
            .unwrap_or(1.0)
    }

    /// Screen being faded out together with its opacity.
    pub fn outgoing_screen(&self) -> Option<(&S, f32)> {
        self.swap
            .as_ref()
            .map(|swap| (&swap.outgoing, 1.0 - swap.incoming_alpha))
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some() || self.swap.is_some()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Take the notices accumulated since the last call.
    pub fn drain_notices(&mut self) -> Vec<HostNotice> {
        std::mem::take(&mut self.notices)
    }

    /// Mount the first active screen without a transition.
    pub fn set_root_screen(&mut self, mut screen: S) {
        self.finalize_swap();
        if let Some(mut previous) = self.current.take() {
            previous.will_move_to_parent(false);
            previous.did_move_to_parent(false);
        }

        screen.will_move_to_parent(true);
        screen.did_move_to_parent(true);
        self.current = Some(screen);
        self.install_trigger();
    }

    /// Open the panel from the trigger with a fixed-duration animation.
    pub fn trigger_tapped(&mut self, now: Instant) {
        if self.panel.is_some() {
            log::debug!("menu panel already mounted; ignoring trigger");
            return;
        }

        self.tracking = None;
        self.mount_panel();
        self.start_panel_animation(Snap::Open, now);
    }

    pub fn touch_began(&mut self, point: Point, now: Instant) {
        if self.animation.is_some() {
            log::trace!("touch ignored while the panel is animating");
            return;
        }

        let width = self.panel_width();
        match self.panel.as_ref() {
            Some(mounted) if point.x > width => {
                self.tracking =
                    Some(TouchTracking::new(point, now, mounted.offset));
                self.phase = PresentationState::DraggingClosed;
            },
            None if point.x < self.settings.edge_zone => {
                self.tracking = Some(TouchTracking::new(point, now, -width));
            },
            _ => {},
        }
    }

    pub fn touch_moved(&mut self, point: Point, _now: Instant) {
        if self.animation.is_some() {
            return;
        }
        let Some(mut tracking) = self.tracking else {
            return;
        };

        let delta_x = tracking.update(point);
        self.tracking = Some(tracking);

        if self.panel.is_none() {
            if delta_x <= self.settings.drag_threshold {
                return;
            }
            self.mount_panel();
            self.phase = PresentationState::DraggingOpen;
        }

        let offset = tracking.drag_offset(self.panel_width());
        self.set_panel_offset(offset);
    }

    pub fn touch_ended(&mut self, point: Point, now: Instant) {
        let Some(tracking) = self.tracking else {
            return;
        };
        if self.animation.is_some() {
            return;
        }

        if self.panel.is_none() {
            self.tracking = None;
            self.phase = PresentationState::Closed;
            return;
        }

        let snap = gesture::decide_release(
            &tracking,
            point,
            now,
            self.panel_width(),
            self.settings.flick_window(),
        );
        log::debug!("drag released at x={}: {snap:?}", point.x);
        self.start_panel_animation(snap, now);
    }

    /// Treat a lost touch as a release at its last known location.
    pub fn touch_cancelled(&mut self, now: Instant) {
        if let Some(tracking) = self.tracking {
            self.touch_ended(tracking.last, now);
        }
    }

    /// Swap the active screen for the row's destination and close the panel.
    ///
    /// The item comes from the mounted panel's rows when one is shown and
    /// from the model otherwise. A [`SlideMenuError::DestinationNotFound`]
    /// leaves the host untouched and puts the highlight back.
    pub fn select_row(
        &mut self,
        index: usize,
        now: Instant,
    ) -> Result<(), SlideMenuError> {
        let selection = match self.panel.as_mut() {
            Some(mounted) => mounted.panel.row_tapped(index),
            None => self
                .model
                .get(index)
                .cloned()
                .map(|item| PanelSelection { index, item }),
        };
        let Some(PanelSelection { index, item }) = selection else {
            log::debug!("row {index} is out of range; ignoring selection");
            return Ok(());
        };

        let incoming = match self
            .factory
            .instantiate(item.container_id(), item.destination_id())
        {
            Ok(screen) => screen,
            Err(err) => {
                let selected_index = self.selected_index;
                if let Some(mounted) = self.panel.as_mut() {
                    mounted.panel.restore_highlight(selected_index);
                }
                return Err(err);
            },
        };

        self.selected_index = Some(index);
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_select_item(&item);
        }
        self.notices.push(HostNotice::ItemSelected(item));

        self.swap_screen(incoming, now);
        self.close_menu(now, None);
        Ok(())
    }

    /// Animate the panel closed, then run `completion` after teardown.
    ///
    /// Does nothing when no panel is mounted.
    pub fn close_menu(&mut self, now: Instant, completion: Option<Completion>) {
        if self.panel.is_none() {
            log::debug!("close requested with no panel mounted");
            return;
        }

        self.tracking = None;
        if let Some(completion) = completion {
            self.close_completions.push(completion);
        }

        let already_closing = self
            .animation
            .map(|animation| animation.snap == Snap::Closed)
            .unwrap_or(false);
        if !already_closing {
            self.start_panel_animation(Snap::Closed, now);
        }
    }

    pub fn traits_changed(&mut self, traits: TraitCollection) {
        let previous_width = self.panel_width();
        self.traits = traits;
        self.device = DeviceClass::classify(traits);
        self.refresh_geometry(previous_width);
    }

    pub fn size_changed(&mut self, size: Size) {
        let previous_width = self.panel_width();
        self.bounds = size;
        self.refresh_geometry(previous_width);
    }

    /// Advance in-flight animations to `now`, settling finished ones.
    pub fn tick(&mut self, now: Instant) {
        if let Some(animation) = self.animation {
            if let Some(mounted) = self.panel.as_mut() {
                mounted.offset = animation.offset.value_at(now);
                mounted.overlay_alpha = animation.alpha.value_at(now);
            }
            if animation.offset.is_finished(now) {
                self.animation = None;
                self.finish_panel_animation(animation.snap);
            }
        }

        let fade_finished = match self.swap.as_mut() {
            Some(swap) => {
                swap.incoming_alpha = swap.fade.value_at(now);
                swap.fade.is_finished(now)
            },
            None => false,
        };
        if fade_finished {
            self.finalize_swap();
        }
    }

    fn mount_panel(&mut self) {
        let mut panel = MenuPanel::present(&self.model, self.selected_index);
        panel.apply_shadow();
        let width = self.panel_width();
        log::debug!("mounting menu panel ({width:.1}pt wide)");

        self.panel = Some(MountedPanel {
            panel,
            offset: -width,
            overlay_alpha: 0.0,
        });
    }

    fn set_panel_offset(&mut self, offset: f32) {
        let width = self.panel_width();
        let max_alpha = self.settings.max_overlay_alpha;
        if let Some(mounted) = self.panel.as_mut() {
            mounted.offset = gesture::clamp_offset(offset, width);
            mounted.overlay_alpha =
                max_alpha * gesture::reveal_fraction(mounted.offset, width);
        }
    }

    fn start_panel_animation(&mut self, snap: Snap, now: Instant) {
        let Some(mounted) = self.panel.as_ref() else {
            return;
        };
        let (target_offset, target_alpha) = match snap {
            Snap::Open => (0.0, self.settings.max_overlay_alpha),
            Snap::Closed => (-self.panel_width(), 0.0),
        };
        let duration = self.settings.animation_duration();
        let easing = self.settings.easing;

        self.animation = Some(PanelAnimation {
            offset: Tween::new(
                mounted.offset,
                target_offset,
                now,
                duration,
                easing,
            ),
            alpha: Tween::new(
                mounted.overlay_alpha,
                target_alpha,
                now,
                duration,
                easing,
            ),
            snap,
        });
        self.phase = match snap {
            Snap::Open => PresentationState::OpeningAnimated,
            Snap::Closed => PresentationState::ClosingAnimated,
        };
    }

    fn finish_panel_animation(&mut self, snap: Snap) {
        self.tracking = None;
        match snap {
            Snap::Open => {
                self.phase = PresentationState::Open;
                self.notices.push(HostNotice::PanelOpened);
            },
            Snap::Closed => self.tear_down_panel(),
        }
    }

    fn tear_down_panel(&mut self) {
        if let Some(mut mounted) = self.panel.take() {
            mounted.panel.remove_shadow();
            log::debug!("menu panel torn down");
        }
        self.animation = None;
        self.phase = PresentationState::Closed;
        self.notices.push(HostNotice::PanelClosed);

        for completion in std::mem::take(&mut self.close_completions) {
            completion();
        }
    }

    fn swap_screen(&mut self, mut incoming: S, now: Instant) {
        self.finalize_swap();

        incoming.will_move_to_parent(true);
        match self.current.take() {
            Some(outgoing) => {
                self.swap = Some(ScreenSwap {
                    outgoing,
                    fade: Tween::new(
                        0.0,
                        1.0,
                        now,
                        self.settings.animation_duration(),
                        self.settings.easing,
                    ),
                    incoming_alpha: 0.0,
                });
            },
            None => {
                incoming.did_move_to_parent(true);
                self.notices.push(HostNotice::ScreenSwapped);
            },
        }
        self.current = Some(incoming);
        self.install_trigger();
    }

    fn finalize_swap(&mut self) {
        let Some(mut swap) = self.swap.take() else {
            return;
        };
        swap.outgoing.will_move_to_parent(false);
        swap.outgoing.did_move_to_parent(false);
        drop(swap);

        if let Some(current) = self.current.as_mut() {
            current.did_move_to_parent(true);
        }
        self.notices.push(HostNotice::ScreenSwapped);
    }

    fn install_trigger(&mut self) {
        let Some(screen) = self.current.as_ref() else {
            return;
        };
        let in_visible_navigation =
            topmost_screen(screen).in_visible_navigation;

        if let Some(mut previous) = self.trigger.take() {
            previous.remove_from_parent();
        }

        let tint = self.settings.trigger_tint;
        let trigger = if in_visible_navigation {
            Trigger::Bar(BarTrigger::new(tint))
        } else {
            Trigger::Floating(FloatingTrigger::new(
                tint,
                self.settings.trigger_size,
                TriggerOffsets::for_device(self.device, self.bounds),
            ))
        };
        log::debug!("installed menu trigger (bar: {})", trigger.is_bar());
        self.trigger = Some(trigger);
    }

    fn refresh_geometry(&mut self, previous_width: f32) {
        let width = self.panel_width();

        if let Some(Trigger::Floating(trigger)) = self.trigger.as_mut() {
            let offsets = TriggerOffsets::for_device(self.device, self.bounds);
            trigger.set_offsets(offsets);
        }

        if let Some(tracking) = self.tracking.as_mut() {
            if tracking.origin_offset < 0.0 {
                tracking.origin_offset = -width;
            }
        }

        let Some(mounted) = self.panel.as_mut() else {
            return;
        };
        let fraction =
            gesture::reveal_fraction(mounted.offset, previous_width);
        mounted.offset =
            gesture::clamp_offset(-(width * (1.0 - fraction)), width);
        mounted.panel.apply_shadow();

        // Offsets are proportional to the width, so scaling the whole tween
        // keeps the reveal fraction on every later frame. Overlay alpha does
        // not depend on the width.
        if let Some(animation) = self.animation.as_mut() {
            if previous_width > 0.0 {
                animation.offset.scale(width / previous_width);
            }
        }
    }
}
