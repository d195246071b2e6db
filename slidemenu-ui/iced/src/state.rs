use slidemenu::{HostController, Screen};

/// Internal runtime state: the host plus the last known mouse position.
pub(crate) struct SlideMenuState<S> {
    host: HostController<S>,
    cursor: iced::Point,
}

impl<S: Screen> SlideMenuState<S> {
    pub(crate) fn new(host: HostController<S>) -> Self {
        Self {
            host,
            cursor: iced::Point::ORIGIN,
        }
    }

    pub(crate) fn host(&self) -> &HostController<S> {
        &self.host
    }

    pub(crate) fn host_mut(&mut self) -> &mut HostController<S> {
        &mut self.host
    }

    pub(crate) fn cursor(&self) -> iced::Point {
        self.cursor
    }

    pub(crate) fn update_cursor(&mut self, position: iced::Point) {
        self.cursor = position;
    }
}
