use iced::widget::{Space, button, column, container, row, text};
use iced::{Color, Element, Length, alignment};
use slidemenu::{Containment, MenuItem, Screen, SlideMenuError};
use slidemenu_ui_iced::ScreenContext;

use crate::app::AppEvent;

const NAV_BAR_HEIGHT: f32 = 44.0;
const TAB_BAR_HEIGHT: f32 = 48.0;

/// Menu shown by the demo, in display order.
pub(crate) fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("home", "Main", "Home"),
        MenuItem::new("inbox", "Mail", "Inbox"),
        MenuItem::new("library", "Main", "Library"),
        MenuItem::new("archive", "Mail", "Archive"),
        MenuItem::new("labs", "Main", "Labs"),
    ]
}

/// A leaf screen with a title, a body and an accent colour.
pub(crate) struct Page {
    title: String,
    body: String,
    accent: Color,
}

impl Page {
    fn new(title: &str, body: &str, accent: Color) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            accent,
        }
    }
}

pub(crate) enum DemoScreen {
    Page(Page),
    Navigation {
        title: String,
        stack: Vec<DemoScreen>,
        bar_visible: bool,
    },
    Tabs {
        tabs: Vec<(String, DemoScreen)>,
        selected: usize,
    },
}

impl DemoScreen {
    pub(crate) fn home() -> Self {
        DemoScreen::Page(Page::new(
            "Home",
            "Swipe from the left edge or press the menu button.",
            Color::from_rgb8(0x3b, 0x82, 0xf6),
        ))
    }

    /// Select a tab when this screen is a tab container.
    pub(crate) fn select_tab(&mut self, index: usize) -> bool {
        match self {
            DemoScreen::Tabs { tabs, selected } if index < tabs.len() => {
                *selected = index;
                true
            },
            _ => false,
        }
    }

    fn name(&self) -> &str {
        match self {
            DemoScreen::Page(page) => &page.title,
            DemoScreen::Navigation { title, .. } => title,
            DemoScreen::Tabs { .. } => "tabs",
        }
    }
}

impl Screen for DemoScreen {
    fn containment(&self) -> Option<Containment<'_>> {
        match self {
            DemoScreen::Page(_) => None,
            DemoScreen::Navigation {
                stack, bar_visible, ..
            } => Some(Containment::Navigation {
                top: stack.last().map(|screen| screen as &dyn Screen),
                bar_visible: *bar_visible,
            }),
            DemoScreen::Tabs { tabs, selected } => Some(Containment::Tabs {
                selected: tabs
                    .get(*selected)
                    .map(|(_, screen)| screen as &dyn Screen),
                first: tabs.first().map(|(_, screen)| screen as &dyn Screen),
            }),
        }
    }

    fn will_move_to_parent(&mut self, attached: bool) {
        log::debug!("screen '{}' will attach: {attached}", self.name());
    }

    fn did_move_to_parent(&mut self, attached: bool) {
        log::debug!("screen '{}' did attach: {attached}", self.name());
    }
}

/// Build the screen for a menu destination.
pub(crate) fn instantiate(
    container_id: &str,
    destination_id: &str,
) -> Result<DemoScreen, SlideMenuError> {
    let screen = match (container_id, destination_id) {
        ("Main", "home") => DemoScreen::home(),
        ("Mail", "inbox") => DemoScreen::Navigation {
            title: "Inbox".to_string(),
            stack: vec![DemoScreen::Page(Page::new(
                "Inbox",
                "The menu button sits in the navigation bar here.",
                Color::from_rgb8(0x10, 0xb9, 0x81),
            ))],
            bar_visible: true,
        },
        ("Main", "library") => DemoScreen::Tabs {
            tabs: vec![
                (
                    "Books".to_string(),
                    DemoScreen::Page(Page::new(
                        "Books",
                        "Tabs without a navigation bar get a floating button.",
                        Color::from_rgb8(0xf5, 0x9e, 0x0b),
                    )),
                ),
                (
                    "Music".to_string(),
                    DemoScreen::Navigation {
                        title: "Music".to_string(),
                        stack: vec![DemoScreen::Page(Page::new(
                            "Music",
                            "A navigation stack nested in a tab.",
                            Color::from_rgb8(0xec, 0x48, 0x99),
                        ))],
                        bar_visible: true,
                    },
                ),
            ],
            selected: 0,
        },
        ("Mail", "archive") => DemoScreen::Navigation {
            title: "Archive".to_string(),
            stack: vec![DemoScreen::Page(Page::new(
                "Archive",
                "The navigation bar is hidden, so the button floats.",
                Color::from_rgb8(0x8b, 0x5c, 0xf6),
            ))],
            bar_visible: false,
        },
        _ => {
            return Err(SlideMenuError::destination_not_found(
                container_id,
                destination_id,
            ));
        },
    };
    Ok(screen)
}

/// Render a screen handed out by the slide menu.
pub(crate) fn view<'a>(
    ctx: ScreenContext<'a, DemoScreen, AppEvent>,
) -> Element<'a, AppEvent> {
    render(ctx.screen, ctx.alpha, ctx.bar_trigger, !ctx.is_outgoing)
}

fn render<'a>(
    screen: &'a DemoScreen,
    alpha: f32,
    bar_trigger: Option<Element<'a, AppEvent>>,
    interactive: bool,
) -> Element<'a, AppEvent> {
    match screen {
        DemoScreen::Page(page) => page_view(page, alpha),
        DemoScreen::Navigation {
            title,
            stack,
            bar_visible,
        } => {
            let content = match stack.last() {
                Some(top) => render(top, alpha, None, interactive),
                None => container(Space::new()).height(Length::Fill).into(),
            };
            if *bar_visible {
                column![nav_bar(title, alpha, bar_trigger), content].into()
            } else {
                content
            }
        },
        DemoScreen::Tabs { tabs, selected } => {
            let content = match tabs.get(*selected).or(tabs.first()) {
                Some((_, child)) => {
                    render(child, alpha, bar_trigger, interactive)
                },
                None => container(Space::new()).height(Length::Fill).into(),
            };
            column![content, tab_bar(tabs, *selected, alpha, interactive)]
                .into()
        },
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn page_view(page: &Page, alpha: f32) -> Element<'_, AppEvent> {
    let accent = faded(page.accent, alpha);
    let ink = faded(Color::WHITE, alpha);

    let content = column![
        text(page.title.as_str()).size(28).color(ink),
        text(page.body.as_str()).size(15).color(ink),
    ]
    .spacing(12)
    .padding([80.0, 24.0]);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(accent.into()),
            ..Default::default()
        })
        .into()
}

fn nav_bar<'a>(
    title: &'a str,
    alpha: f32,
    bar_trigger: Option<Element<'a, AppEvent>>,
) -> Element<'a, AppEvent> {
    let leading: Element<'a, AppEvent> = bar_trigger.unwrap_or_else(|| {
        container(Space::new())
            .width(Length::Fixed(NAV_BAR_HEIGHT))
            .into()
    });
    let ink = faded(Color::WHITE, alpha);
    let background = faded(Color::from_rgb8(0x1f, 0x29, 0x37), alpha);

    let title = container(text(title).size(17).color(ink))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    container(
        row![leading, title]
            .align_y(alignment::Vertical::Center)
            .padding([0.0, 4.0]),
    )
    .width(Length::Fill)
    .height(Length::Fixed(NAV_BAR_HEIGHT))
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(background.into()),
        ..Default::default()
    })
    .into()
}

fn tab_bar(
    tabs: &[(String, DemoScreen)],
    selected: usize,
    alpha: f32,
    interactive: bool,
) -> Element<'_, AppEvent> {
    let background = faded(Color::from_rgb8(0x11, 0x18, 0x27), alpha);
    let buttons = tabs.iter().enumerate().map(|(index, (label, _))| {
        let ink = if index == selected {
            faded(Color::WHITE, alpha)
        } else {
            faded(Color::from_rgb8(0x9c, 0xa3, 0xaf), alpha)
        };
        let tab = button(
            container(text(label.as_str()).size(14).color(ink))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| button::Style::default());

        let tab = if interactive {
            tab.on_press(AppEvent::SelectTab(index))
        } else {
            tab
        };
        tab.into()
    });

    container(row(buttons))
        .width(Length::Fill)
        .height(Length::Fixed(TAB_BAR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}
