use crate::error::SlideMenuError;

/// Upper bound on nested containers walked while looking for the top screen.
pub const MAX_CONTAINMENT_DEPTH: usize = 16;

/// A screen that can be mounted as the host's active content.
///
/// Screens that wrap other screens (navigation stacks, tab bars) expose their
/// children through [`Screen::containment`]; leaf screens keep the default.
pub trait Screen {
    fn containment(&self) -> Option<Containment<'_>> {
        None
    }

    /// Called before the screen is attached to (`true`) or detached from
    /// (`false`) the host.
    fn will_move_to_parent(&mut self, _attached: bool) {}

    /// Called once the attach/detach has completed.
    fn did_move_to_parent(&mut self, _attached: bool) {}
}

/// How a container screen exposes its visible child.
pub enum Containment<'a> {
    Navigation {
        top: Option<&'a dyn Screen>,
        bar_visible: bool,
    },
    Tabs {
        selected: Option<&'a dyn Screen>,
        first: Option<&'a dyn Screen>,
    },
}

impl<'a> Containment<'a> {
    /// The child the user currently sees.
    pub fn active_child(&self) -> Option<&'a dyn Screen> {
        match self {
            Containment::Navigation { top, .. } => *top,
            Containment::Tabs { selected, first } => selected.or(*first),
        }
    }
}

/// Result of unwrapping nested containers.
#[derive(Clone, Copy)]
pub struct TopScreen<'a> {
    pub screen: &'a dyn Screen,
    /// Number of containers walked through.
    pub depth: usize,
    /// Whether the nearest enclosing navigation container shows its bar.
    pub in_visible_navigation: bool,
}

/// Walk navigation and tab containers down to the visible leaf screen.
pub fn topmost_screen(root: &dyn Screen) -> TopScreen<'_> {
    let mut current = root;
    let mut depth = 0;
    let mut navigation_bar: Option<bool> = None;

    while depth < MAX_CONTAINMENT_DEPTH {
        let Some(containment) = current.containment() else {
            break;
        };
        let Some(child) = containment.active_child() else {
            break;
        };
        if let Containment::Navigation { bar_visible, .. } = containment {
            navigation_bar = Some(bar_visible);
        }
        current = child;
        depth += 1;
    }

    if depth == MAX_CONTAINMENT_DEPTH && current.containment().is_some() {
        log::warn!(
            "screen containment deeper than {MAX_CONTAINMENT_DEPTH}; \
             stopping at the last reachable container"
        );
    }

    TopScreen {
        screen: current,
        depth,
        in_visible_navigation: navigation_bar.unwrap_or(false),
    }
}

/// Produces screens for menu destinations.
pub trait ScreenFactory<S> {
    fn instantiate(
        &self,
        container_id: &str,
        destination_id: &str,
    ) -> Result<S, SlideMenuError>;
}

impl<S, F> ScreenFactory<S> for F
where
    F: Fn(&str, &str) -> Result<S, SlideMenuError>,
{
    fn instantiate(
        &self,
        container_id: &str,
        destination_id: &str,
    ) -> Result<S, SlideMenuError> {
        self(container_id, destination_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    enum TestScreen {
        Leaf(&'static str),
        Navigation {
            stack: Vec<TestScreen>,
            bar_visible: bool,
        },
        Tabs {
            tabs: Vec<TestScreen>,
            selected: Option<usize>,
        },
    }

    impl Screen for TestScreen {
        fn containment(&self) -> Option<Containment<'_>> {
            match self {
                TestScreen::Leaf(_) => None,
                TestScreen::Navigation { stack, bar_visible } => {
                    Some(Containment::Navigation {
                        top: stack.last().map(|screen| screen as &dyn Screen),
                        bar_visible: *bar_visible,
                    })
                },
                TestScreen::Tabs { tabs, selected } => Some(Containment::Tabs {
                    selected: selected
                        .and_then(|index| tabs.get(index))
                        .map(|screen| screen as &dyn Screen),
                    first: tabs.first().map(|screen| screen as &dyn Screen),
                }),
            }
        }
    }

    fn points_to(top: &TopScreen<'_>, expected: &TestScreen) -> bool {
        std::ptr::addr_eq(
            top.screen as *const dyn Screen,
            expected as *const TestScreen,
        )
    }

    #[test]
    fn given_leaf_screen_when_unwrapped_then_it_is_its_own_top() {
        let leaf = TestScreen::Leaf("home");
        let top = topmost_screen(&leaf);

        assert!(points_to(&top, &leaf));
        assert_eq!(top.depth, 0);
        assert!(!top.in_visible_navigation);
    }

    #[test]
    fn given_navigation_stack_when_unwrapped_then_last_screen_is_top() {
        let nav = TestScreen::Navigation {
            stack: vec![TestScreen::Leaf("root"), TestScreen::Leaf("detail")],
            bar_visible: true,
        };
        let top = topmost_screen(&nav);

        let TestScreen::Navigation { stack, .. } = &nav else {
            unreachable!()
        };
        assert!(points_to(&top, &stack[1]));
        assert!(top.in_visible_navigation);
    }

    #[test]
    fn given_tabs_without_selection_when_unwrapped_then_first_tab_is_used() {
        let tabs = TestScreen::Tabs {
            tabs: vec![TestScreen::Leaf("a"), TestScreen::Leaf("b")],
            selected: None,
        };
        let top = topmost_screen(&tabs);

        let TestScreen::Tabs { tabs: children, .. } = &tabs else {
            unreachable!()
        };
        assert!(points_to(&top, &children[0]));
        assert!(!top.in_visible_navigation);
    }

    #[test]
    fn given_navigation_inside_selected_tab_when_unwrapped_then_bar_visibility_is_reported()
     {
        let tabs = TestScreen::Tabs {
            tabs: vec![
                TestScreen::Leaf("a"),
                TestScreen::Navigation {
                    stack: vec![TestScreen::Leaf("inner")],
                    bar_visible: false,
                },
            ],
            selected: Some(1),
        };
        let top = topmost_screen(&tabs);

        assert_eq!(top.depth, 2);
        assert!(!top.in_visible_navigation);
    }

    #[test]
    fn given_tabs_nested_in_visible_navigation_when_unwrapped_then_nearest_navigation_wins()
     {
        let nav = TestScreen::Navigation {
            stack: vec![TestScreen::Tabs {
                tabs: vec![TestScreen::Leaf("x")],
                selected: Some(0),
            }],
            bar_visible: true,
        };
        let top = topmost_screen(&nav);

        assert_eq!(top.depth, 2);
        assert!(top.in_visible_navigation);
    }

    #[test]
    fn given_empty_navigation_when_unwrapped_then_container_itself_is_top() {
        let nav = TestScreen::Navigation {
            stack: Vec::new(),
            bar_visible: true,
        };
        let top = topmost_screen(&nav);

        assert!(points_to(&top, &nav));
        assert!(!top.in_visible_navigation);
    }

    #[test]
    fn given_closure_factory_when_destination_is_unknown_then_typed_error_is_returned()
     {
        let factory = |container: &str, destination: &str| {
            if destination == "home" {
                Ok(TestScreen::Leaf("home"))
            } else {
                Err(SlideMenuError::destination_not_found(
                    container,
                    destination,
                ))
            }
        };

        assert!(factory.instantiate("Main", "home").is_ok());
        let err = factory
            .instantiate("Main", "missing")
            .err()
            .expect("missing destination");
        assert_eq!(
            err,
            SlideMenuError::destination_not_found("Main", "missing")
        );
    }
}
