use iced::widget::{Space, container, opaque};
use iced::{Color, Element, Length, Theme};

use crate::event::SlideMenuIntent;

/// Props for the dimming overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OverlayProps {
    pub(crate) alpha: f32,
}

/// Render a black layer over the active screen that swallows presses.
pub(crate) fn view<'a>(
    props: OverlayProps,
) -> Element<'a, SlideMenuIntent, Theme, iced::Renderer> {
    let color = Color {
        a: props.alpha,
        ..Color::BLACK
    };

    opaque(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(color.into()),
                ..Default::default()
            }),
    )
}
