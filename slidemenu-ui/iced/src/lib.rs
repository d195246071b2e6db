//! [`iced`] front end for the [`slidemenu`] host controller.
//!
//! The crate is split into two layers:
//! - a widget ([`SlideMenuWidget`]) that owns the host and reduces
//!   [`SlideMenuIntent`]s into host operations and [`SlideMenuEffect`]s;
//! - a view builder ([`SlideMenuView`]) that stacks the active screen, the
//!   trigger, the dimming overlay and the panel.
//!
//! The recommended flow:
//! 1. keep a [`SlideMenuWidget`] in your app state;
//! 2. map [`SlideMenuWidget::subscription`] into your message type;
//! 3. reduce intents in `update` with a [`SlideMenuCtx`] stamped with the
//!    current instant, and route the resulting effects;
//! 4. render with [`SlideMenuView`], drawing screens in the callback.

mod convert;
mod event;
mod host_view;
mod model;
mod reducer;
mod state;
mod subscription;
mod view;
mod widget;

pub use convert::{
    REGULAR_SIZE_CLASS_MIN, point_from_iced, shadow_to_iced, size_from_iced,
    tint_to_color, traits_for_window,
};
pub use event::{SlideMenuEffect, SlideMenuEvent, SlideMenuIntent};
pub use host_view::{ScreenContext, SlideMenuView};
pub use model::{
    PanelViewModel, SlideMenuViewModel, TriggerPlacement, TriggerViewModel,
};
pub use reducer::SlideMenuCtx;
pub use widget::SlideMenuWidget;
