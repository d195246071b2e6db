use iced::widget::{button, container, svg};
use iced::{Border, Element, Length, Theme, alignment};

use crate::convert::tint_to_color;
use crate::event::SlideMenuIntent;
use crate::model::{TriggerPlacement, TriggerViewModel};

const BAR_TRIGGER_SIZE: f32 = 44.0;
const ICON_SIZE: f32 = 22.0;

/// Props for the menu trigger view.
#[derive(Debug, Clone)]
pub(crate) struct TriggerProps {
    pub(crate) vm: TriggerViewModel,
    pub(crate) icon: svg::Handle,
}

/// Render the tinted trigger icon as a borderless button.
pub(crate) fn view<'a>(
    props: TriggerProps,
) -> Element<'a, SlideMenuIntent, Theme, iced::Renderer> {
    let color = tint_to_color(props.vm.tint);
    let size = match props.vm.placement {
        TriggerPlacement::Floating { size, .. } => size,
        TriggerPlacement::Bar => BAR_TRIGGER_SIZE,
    };

    let icon = svg::Svg::new(props.icon)
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
        .style(move |_, _| svg::Style { color: Some(color) });

    let content = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(SlideMenuIntent::TriggerPressed)
        .padding(0)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(|_, _| button::Style {
            background: None,
            border: Border::default(),
            ..Default::default()
        })
        .into()
}
