mod app;
mod screens;
mod settings;

use env_logger::Env;
use iced::{Size, window};

use crate::app::App;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = settings::load_config_or_default();
    let window = config.window;
    let menu = config.menu;

    iced::application(move || App::new(menu.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(window.width, window.height),
            ..window::Settings::default()
        })
        .resizable(true)
        .subscription(App::subscription)
        .run()
}
