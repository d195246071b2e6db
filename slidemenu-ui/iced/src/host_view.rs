use iced::widget::{Space, Stack, container, svg};
use iced::{Element, Length, Padding};
use slidemenu::Screen;

use crate::event::SlideMenuIntent;
use crate::model::{TriggerPlacement, TriggerViewModel};
use crate::view::overlay::{self, OverlayProps};
use crate::view::panel::{self, PanelProps};
use crate::view::trigger::{self, TriggerProps};
use crate::widget::SlideMenuWidget;

/// Rendering context passed to the screen callback.
pub struct ScreenContext<'a, S, Message> {
    pub screen: &'a S,
    /// Opacity to draw the screen with; below `1.0` during a cross-fade.
    pub alpha: f32,
    /// Whether this is the screen being faded out.
    pub is_outgoing: bool,
    /// Trigger to place as the leading item of the screen's navigation bar.
    pub bar_trigger: Option<Element<'a, Message>>,
}

type ScreenRenderer<'a, S, Message> =
    dyn Fn(ScreenContext<'a, S, Message>) -> Element<'a, Message> + 'a;

/// Composes the active screen, trigger, overlay and panel into one layer
/// stack.
///
/// The host is expected to fill the window: pointer positions arrive in
/// window coordinates.
pub struct SlideMenuView<'a, S, Message> {
    widget: &'a SlideMenuWidget<S>,
    icon: svg::Handle,
    on_intent: fn(SlideMenuIntent) -> Message,
    render_screen: Box<ScreenRenderer<'a, S, Message>>,
}

impl<'a, S, Message> SlideMenuView<'a, S, Message>
where
    S: Screen + 'a,
    Message: 'a,
{
    /// Create a view that renders screens with `render_screen` and wraps
    /// widget intents with `on_intent`.
    pub fn new(
        widget: &'a SlideMenuWidget<S>,
        icon: svg::Handle,
        on_intent: fn(SlideMenuIntent) -> Message,
        render_screen: impl Fn(
            ScreenContext<'a, S, Message>,
        ) -> Element<'a, Message>
        + 'a,
    ) -> Self {
        Self {
            widget,
            icon,
            on_intent,
            render_screen: Box::new(render_screen),
        }
    }

    /// Build the element tree.
    pub fn view(self) -> Element<'a, Message> {
        let vm = self.widget.vm();
        let host = self.widget.host();
        let mut layers: Vec<Element<'a, Message>> = Vec::new();

        if let Some((screen, alpha)) = host.outgoing_screen() {
            layers.push((self.render_screen)(ScreenContext {
                screen,
                alpha,
                is_outgoing: true,
                bar_trigger: None,
            }));
        }

        let bar_trigger = vm
            .trigger
            .filter(|trigger| trigger.placement == TriggerPlacement::Bar)
            .map(|trigger| self.trigger(trigger));
        match host.current_screen() {
            Some(screen) => {
                layers.push((self.render_screen)(ScreenContext {
                    screen,
                    alpha: vm.screen_alpha,
                    is_outgoing: false,
                    bar_trigger,
                }));
            },
            None => layers.push(
                container(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
            ),
        }

        if let Some(trigger_vm) = vm.trigger {
            if let TriggerPlacement::Floating { offsets, .. } =
                trigger_vm.placement
            {
                let padding = Padding {
                    top: offsets.top.max(0.0),
                    left: offsets.leading.max(0.0),
                    ..Padding::ZERO
                };
                layers.push(
                    container(self.trigger(trigger_vm)).padding(padding).into(),
                );
            }
        }

        if let Some(alpha) = vm.overlay_alpha {
            layers.push(
                overlay::view(OverlayProps { alpha }).map(self.on_intent),
            );
        }

        if let Some(panel_vm) = vm.panel {
            layers.push(
                panel::view(PanelProps { vm: panel_vm }).map(self.on_intent),
            );
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn trigger(&self, vm: TriggerViewModel) -> Element<'a, Message> {
        trigger::view(TriggerProps {
            vm,
            icon: self.icon.clone(),
        })
        .map(self.on_intent)
    }
}
