use iced::widget::{Column, button, column, container, scrollable, text};
use iced::{Border, Element, Length, Theme, alignment};
use slidemenu::PanelRow;

use crate::convert::shadow_to_iced;
use crate::event::SlideMenuIntent;
use crate::model::PanelViewModel;

const TITLE_HEIGHT: f32 = 44.0;
const TITLE_TEXT_SIZE: f32 = 17.0;
const ROW_TEXT_SIZE: f32 = 15.0;
const ROW_PADDING_X: f32 = 16.0;

/// Props for the menu panel view.
#[derive(Debug, Clone)]
pub(crate) struct PanelProps {
    pub(crate) vm: PanelViewModel,
}

/// Render the panel clipped to its visible width, trailing edge first.
pub(crate) fn view<'a>(
    props: PanelProps,
) -> Element<'a, SlideMenuIntent, Theme, iced::Renderer> {
    let visible_width = props.vm.visible_width();
    let PanelViewModel {
        title,
        rows,
        row_height,
        width,
        shadow,
        ..
    } = props.vm;

    let title = container(
        text(title)
            .size(TITLE_TEXT_SIZE)
            .wrapping(text::Wrapping::None),
    )
    .width(Length::Fill)
    .height(Length::Fixed(TITLE_HEIGHT))
    .padding([0.0, ROW_PADDING_X])
    .align_y(alignment::Vertical::Center);

    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| panel_row(row, index, row_height));
    let list = scrollable(Column::with_children(rows).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let content = column![title, list]
        .width(Length::Fixed(width))
        .height(Length::Fill);

    let shadow = shadow.map(shadow_to_iced).unwrap_or_default();

    container(content)
        .width(Length::Fixed(visible_width))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .clip(true)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                text_color: Some(palette.background.base.text),
                shadow,
                ..Default::default()
            }
        })
        .into()
}

fn panel_row<'a>(
    row: PanelRow,
    index: usize,
    height: f32,
) -> Element<'a, SlideMenuIntent, Theme, iced::Renderer> {
    let highlighted = row.highlighted;

    let label = container(
        text(row.title)
            .size(ROW_TEXT_SIZE)
            .wrapping(text::Wrapping::None),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding([0.0, ROW_PADDING_X])
    .align_y(alignment::Vertical::Center);

    button(label)
        .on_press(SlideMenuIntent::RowPressed(index))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(move |theme: &Theme, status| {
            let palette = theme.extended_palette();
            let background = if highlighted
                || status == button::Status::Pressed
            {
                Some(palette.primary.weak.color.into())
            } else if status == button::Status::Hovered {
                Some(palette.background.weak.color.into())
            } else {
                None
            };

            button::Style {
                background,
                text_color: palette.background.base.text,
                border: Border::default(),
                ..Default::default()
            }
        })
        .into()
}
