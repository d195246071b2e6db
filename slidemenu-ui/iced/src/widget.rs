use iced::{Subscription, Task};
use slidemenu::{Completion, HostController, Screen};

use crate::event::{SlideMenuEvent, SlideMenuIntent};
use crate::model::SlideMenuViewModel;
use crate::reducer::{self, SlideMenuCtx};
use crate::state::SlideMenuState;
use crate::subscription;

/// Slide menu widget owning the host controller.
pub struct SlideMenuWidget<S> {
    state: SlideMenuState<S>,
}

impl<S: Screen> SlideMenuWidget<S> {
    pub fn new(host: HostController<S>) -> Self {
        Self {
            state: SlideMenuState::new(host),
        }
    }

    /// Reduce an intent event into host updates and effect events.
    pub fn reduce(
        &mut self,
        intent: SlideMenuIntent,
        ctx: &SlideMenuCtx,
    ) -> Task<SlideMenuEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub fn vm(&self) -> SlideMenuViewModel {
        SlideMenuViewModel::from_host(self.state.host())
    }

    /// Runtime events the widget must receive through the app.
    pub fn subscription(&self) -> Subscription<SlideMenuIntent> {
        subscription::subscription(self.is_animating())
    }

    /// Close the panel programmatically; see [`HostController::close_menu`].
    pub fn close_menu(
        &mut self,
        ctx: &SlideMenuCtx,
        completion: Option<Completion>,
    ) {
        self.state.host_mut().close_menu(ctx.now, completion);
    }

    pub fn is_animating(&self) -> bool {
        self.state.host().is_animating()
    }

    pub fn host(&self) -> &HostController<S> {
        self.state.host()
    }

    pub fn host_mut(&mut self) -> &mut HostController<S> {
        self.state.host_mut()
    }
}
