use iced::{Event, Subscription, event, mouse, touch, window};

use crate::event::SlideMenuIntent;

/// Build the runtime subscriptions the widget needs.
///
/// Frame ticks are only requested while an animation is in flight.
pub(crate) fn subscription(animating: bool) -> Subscription<SlideMenuIntent> {
    let mut subs = vec![event::listen_with(route)];
    if animating {
        subs.push(window::frames().map(SlideMenuIntent::Frame));
    }
    Subscription::batch(subs)
}

/// Map pointer, touch and window events onto widget intents.
///
/// Presses are forwarded even when a child widget captured them, so an edge
/// swipe may start on top of interactive content.
pub(crate) fn route(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<SlideMenuIntent> {
    match event {
        Event::Window(window::Event::Opened { size, .. })
        | Event::Window(window::Event::Resized(size)) => {
            Some(SlideMenuIntent::WindowResized(size))
        },
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(SlideMenuIntent::PointerMoved(position))
        },
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(SlideMenuIntent::PointerPressed(None))
        },
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(SlideMenuIntent::PointerReleased(None))
        },
        Event::Mouse(mouse::Event::CursorLeft) => {
            Some(SlideMenuIntent::PointerLost)
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(SlideMenuIntent::PointerPressed(Some(position)))
        },
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(SlideMenuIntent::PointerMoved(position))
        },
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(SlideMenuIntent::PointerReleased(Some(position)))
        },
        Event::Touch(touch::Event::FingerLost { .. }) => {
            Some(SlideMenuIntent::PointerLost)
        },
        _ => None,
    }
}
