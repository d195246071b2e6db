use std::time::Instant;

use iced::widget::svg;
use iced::{Element, Subscription, Task, Theme};
use slidemenu::{HostController, Settings};
use slidemenu_ui_iced::{
    SlideMenuCtx, SlideMenuEffect, SlideMenuEvent, SlideMenuIntent,
    SlideMenuView, SlideMenuWidget,
};

use crate::screens::{self, DemoScreen};

const MENU_ICON: &[u8] = include_bytes!("../assets/menu.svg");

#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    SlideMenu(SlideMenuEvent),
    SelectTab(usize),
}

impl AppEvent {
    fn menu_intent(intent: SlideMenuIntent) -> Self {
        AppEvent::SlideMenu(SlideMenuEvent::Intent(intent))
    }
}

pub(crate) struct App {
    menu: SlideMenuWidget<DemoScreen>,
    icon: svg::Handle,
}

impl App {
    pub(crate) fn new(settings: Settings) -> (Self, Task<AppEvent>) {
        (Self::with_settings(settings), Task::none())
    }

    fn with_settings(settings: Settings) -> Self {
        let mut host = HostController::new(settings, screens::instantiate);
        host.add_items(screens::menu_items());
        host.set_delegate(|item: &slidemenu::MenuItem| {
            log::info!("menu selected '{}'", item.title());
        });
        host.set_root_screen(DemoScreen::home());

        Self {
            menu: SlideMenuWidget::new(host),
            icon: svg::Handle::from_memory(MENU_ICON),
        }
    }

    pub(crate) fn title(&self) -> String {
        String::from("SlideMenu")
    }

    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        let ctx = SlideMenuCtx::at(Instant::now());
        match event {
            AppEvent::SlideMenu(SlideMenuEvent::Intent(intent)) => self
                .menu
                .reduce(intent, &ctx)
                .map(AppEvent::SlideMenu),
            AppEvent::SlideMenu(SlideMenuEvent::Effect(effect)) => {
                self.route_effect(effect, &ctx);
                Task::none()
            },
            AppEvent::SelectTab(index) => {
                self.menu
                    .host_mut()
                    .update_current_screen(|screen| screen.select_tab(index));
                Task::none()
            },
        }
    }

    pub(crate) fn view(&self) -> Element<'_, AppEvent> {
        SlideMenuView::new(
            &self.menu,
            self.icon.clone(),
            AppEvent::menu_intent,
            screens::view,
        )
        .view()
    }

    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        self.menu.subscription().map(AppEvent::menu_intent)
    }

    fn route_effect(&mut self, effect: SlideMenuEffect, ctx: &SlideMenuCtx) {
        match effect {
            SlideMenuEffect::SelectionFailed(err) => {
                let message = err.to_string();
                self.menu.close_menu(
                    ctx,
                    Some(Box::new(move || {
                        log::info!("menu closed after failure: {message}");
                    })),
                );
            },
            SlideMenuEffect::ItemSelected(item) => {
                log::debug!("switching to '{}'", item.destination_id());
            },
            SlideMenuEffect::PanelOpened
            | SlideMenuEffect::PanelClosed
            | SlideMenuEffect::ScreenSwapped => {
                log::trace!("slide menu settled: {effect:?}");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use slidemenu::{PresentationState, topmost_screen};
    use slidemenu_ui_iced::TriggerPlacement;

    use super::*;

    fn intent(app: &mut App, intent: SlideMenuIntent) {
        let _task = app.update(AppEvent::menu_intent(intent));
    }

    #[test]
    fn given_app_when_started_then_home_is_active_with_floating_trigger() {
        let app = App::with_settings(Settings::default());

        let vm = app.menu.vm();
        assert_eq!(vm.phase, PresentationState::Closed);
        assert!(vm.trigger.is_some());
        assert!(app.menu.host().current_screen().is_some());
    }

    #[test]
    fn given_failed_selection_effect_when_routed_then_open_panel_starts_closing()
    {
        let mut app = App::with_settings(Settings::default());
        let window = iced::Size::new(420.0, 760.0);
        intent(&mut app, SlideMenuIntent::WindowResized(window));
        intent(&mut app, SlideMenuIntent::TriggerPressed);
        let later = Instant::now() + Duration::from_secs(1);
        intent(&mut app, SlideMenuIntent::Frame(later));
        assert_eq!(app.menu.vm().phase, PresentationState::Open);

        let _task = app.update(AppEvent::SlideMenu(SlideMenuEvent::Effect(
            SlideMenuEffect::SelectionFailed(
                slidemenu::SlideMenuError::destination_not_found(
                    "Main", "labs",
                ),
            ),
        )));

        assert_eq!(app.menu.vm().phase, PresentationState::ClosingAnimated);
    }

    #[test]
    fn given_library_screen_when_tab_selected_then_trigger_follows_navigation_bar()
    {
        let mut app = App::with_settings(Settings::default());
        intent(&mut app, SlideMenuIntent::RowPressed(2));

        let _task = app.update(AppEvent::SelectTab(1));

        let screen = app.menu.host().current_screen().expect("active screen");
        assert!(topmost_screen(screen).in_visible_navigation);
        let trigger = app.menu.vm().trigger.expect("trigger installed");
        assert_eq!(trigger.placement, TriggerPlacement::Bar);

        let _task = app.update(AppEvent::SelectTab(0));
        let trigger = app.menu.vm().trigger.expect("trigger installed");
        assert!(matches!(
            trigger.placement,
            TriggerPlacement::Floating { .. }
        ));
    }
}
