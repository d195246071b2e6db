use std::time::Instant;

use iced::Task;
use slidemenu::{HostNotice, Screen};

use crate::convert::{point_from_iced, size_from_iced, traits_for_window};
use crate::event::{SlideMenuEffect, SlideMenuEvent, SlideMenuIntent};
use crate::state::SlideMenuState;

/// Read-only context for slide menu reduction.
#[derive(Debug, Clone, Copy)]
pub struct SlideMenuCtx {
    /// Instant the intent is being handled at.
    pub now: Instant,
}

impl SlideMenuCtx {
    pub fn at(now: Instant) -> Self {
        Self { now }
    }
}

/// Reduce an intent into host operations and effect events.
pub(crate) fn reduce<S: Screen>(
    state: &mut SlideMenuState<S>,
    intent: SlideMenuIntent,
    ctx: &SlideMenuCtx,
) -> Task<SlideMenuEvent> {
    let now = ctx.now;
    let mut failure = None;

    match intent {
        SlideMenuIntent::TriggerPressed => state.host_mut().trigger_tapped(now),
        SlideMenuIntent::RowPressed(index) => {
            if let Err(err) = state.host_mut().select_row(index, now) {
                log::warn!("menu selection failed: {err}");
                failure = Some(err);
            }
        },
        SlideMenuIntent::PointerPressed(position) => {
            if let Some(position) = position {
                state.update_cursor(position);
            }
            let point = point_from_iced(state.cursor());
            state.host_mut().touch_began(point, now);
        },
        SlideMenuIntent::PointerMoved(position) => {
            state.update_cursor(position);
            state.host_mut().touch_moved(point_from_iced(position), now);
        },
        SlideMenuIntent::PointerReleased(position) => {
            if let Some(position) = position {
                state.update_cursor(position);
            }
            let point = point_from_iced(state.cursor());
            state.host_mut().touch_ended(point, now);
        },
        SlideMenuIntent::PointerLost => state.host_mut().touch_cancelled(now),
        SlideMenuIntent::WindowResized(size) => {
            let host = state.host_mut();
            host.traits_changed(traits_for_window(size));
            host.size_changed(size_from_iced(size));
        },
        SlideMenuIntent::Frame(frame) => state.host_mut().tick(frame),
    }

    let mut effects: Vec<SlideMenuEffect> = state
        .host_mut()
        .drain_notices()
        .into_iter()
        .map(effect_for_notice)
        .collect();
    if let Some(err) = failure {
        effects.push(SlideMenuEffect::SelectionFailed(err));
    }

    Task::batch(
        effects
            .into_iter()
            .map(|effect| Task::done(SlideMenuEvent::Effect(effect))),
    )
}

fn effect_for_notice(notice: HostNotice) -> SlideMenuEffect {
    match notice {
        HostNotice::PanelOpened => SlideMenuEffect::PanelOpened,
        HostNotice::PanelClosed => SlideMenuEffect::PanelClosed,
        HostNotice::ItemSelected(item) => SlideMenuEffect::ItemSelected(item),
        HostNotice::ScreenSwapped => SlideMenuEffect::ScreenSwapped,
    }
}
