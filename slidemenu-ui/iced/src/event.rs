use std::time::Instant;

use slidemenu::{MenuItem, SlideMenuError};

/// Intent events handled by the slide menu widget.
#[derive(Debug, Clone)]
pub enum SlideMenuIntent {
    TriggerPressed,
    RowPressed(usize),
    /// Press at the given location, or at the last cursor position for mice.
    PointerPressed(Option<iced::Point>),
    PointerMoved(iced::Point),
    PointerReleased(Option<iced::Point>),
    PointerLost,
    WindowResized(iced::Size),
    Frame(Instant),
}

/// Effect events produced by the slide menu reducer.
#[derive(Debug, Clone)]
pub enum SlideMenuEffect {
    PanelOpened,
    PanelClosed,
    ItemSelected(MenuItem),
    ScreenSwapped,
    SelectionFailed(SlideMenuError),
}

/// Slide menu event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub enum SlideMenuEvent {
    /// Intent event reduced by the slide menu widget.
    Intent(SlideMenuIntent),
    /// Settled outcome for app-level routing.
    Effect(SlideMenuEffect),
}
