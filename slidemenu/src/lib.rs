//! Headless slide-out side menu.
//!
//! The crate models everything a left-edge navigation drawer needs without
//! depending on a UI toolkit:
//! - menu data ([`MenuItem`], [`MenuListModel`]);
//! - the panel's row list and elevation ([`MenuPanel`]);
//! - the host state machine ([`HostController`]) driven by trigger taps,
//!   edge swipes, row selections and size changes.
//!
//! Time never comes from a clock inside the crate. Every operation that can
//! start or advance an animation takes the current [`Instant`], and the
//! embedding layer calls [`HostController::tick`] once per frame while
//! [`HostController::is_animating`] is true.
//!
//! # Quick Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use slidemenu::{
//!     HostController, MenuItem, PresentationState, Screen, Settings, Size,
//!     SlideMenuError,
//! };
//!
//! struct Page(String);
//!
//! impl Screen for Page {}
//!
//! let factory = |container: &str, destination: &str| match destination {
//!     "home" | "inbox" => Ok(Page(destination.to_string())),
//!     _ => Err(SlideMenuError::destination_not_found(container, destination)),
//! };
//!
//! let mut host = HostController::new(Settings::default(), factory);
//! host.add_items([
//!     MenuItem::new("home", "Main", "Home"),
//!     MenuItem::new("inbox", "Main", "Inbox"),
//! ]);
//! host.size_changed(Size::new(375.0, 667.0));
//! host.set_root_screen(Page("home".to_string()));
//!
//! let now = Instant::now();
//! host.trigger_tapped(now);
//! host.tick(now + Duration::from_secs(1));
//! assert_eq!(host.phase(), PresentationState::Open);
//!
//! host.select_row(1, now + Duration::from_secs(1)).unwrap();
//! host.tick(now + Duration::from_secs(2));
//! let active = host.current_screen().map(|page| page.0.as_str());
//! assert_eq!(active, Some("inbox"));
//! ```
//!
//! [`Instant`]: std::time::Instant

mod error;
mod geometry;
mod gesture;
mod host;
mod model;
mod panel;
mod screen;
mod settings;
mod transition;
mod trigger;

pub use error::SlideMenuError;
pub use geometry::{
    DeviceClass, Orientation, Point, Size, SizeClass, TraitCollection,
    TriggerOffsets, panel_width,
};
pub use gesture::{Snap, TouchTracking, decide_release, reveal_fraction};
pub use host::{
    Completion, HostController, HostNotice, MenuDelegate, PresentationState,
};
pub use model::{MenuItem, MenuListModel};
pub use panel::{
    MenuPanel, PANEL_ROW_HEIGHT, PANEL_TITLE, PanelRow, PanelSelection,
    PanelShadow,
};
pub use screen::{
    Containment, MAX_CONTAINMENT_DEPTH, Screen, ScreenFactory, TopScreen,
    topmost_screen,
};
pub use settings::Settings;
pub use transition::{Easing, Tween};
pub use trigger::{
    BarTrigger, FloatingTrigger, TRIGGER_ACCESSIBILITY_LABEL, Tint, Trigger,
    TriggerControl,
};
