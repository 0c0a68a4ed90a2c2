use shared::domain::{PageInstanceId, Route};
use tracing::{debug, error};

pub const DEFAULT_NAV_SCROLL_THRESHOLD: f32 = 10.0;

/// App-wide current route. Every navigation mounts a fresh page instance,
/// even when the target equals the current route.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    page: PageInstanceId,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        let mut navigator = Self {
            current: Route::Home,
            page: PageInstanceId(0),
        };
        navigator.navigate(initial);
        navigator
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn page(&self) -> PageInstanceId {
        self.page
    }

    pub fn is_active(&self, route: &Route) -> bool {
        &self.current == route
    }

    pub fn navigate(&mut self, route: Route) -> PageInstanceId {
        if let Route::NotFound(path) = &route {
            error!(route = %path, "404 Error: User attempted to access non-existent route");
        } else {
            debug!(route = %route, "navigating");
        }
        self.current = route;
        self.page = self.page.next();
        self.page
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[derive(Debug, Clone)]
pub struct NavbarState {
    scroll_threshold: f32,
    scrolled: bool,
    menu_open: bool,
}

impl NavbarState {
    pub fn new(scroll_threshold: f32) -> Self {
        Self {
            scroll_threshold,
            scrolled: false,
            menu_open: false,
        }
    }

    pub fn on_scroll(&mut self, offset_y: f32) {
        self.scrolled = offset_y > self.scroll_threshold;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn on_route_change(&mut self) {
        self.menu_open = false;
    }
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new(DEFAULT_NAV_SCROLL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_navigation_mounts_a_new_page() {
        let mut navigator = Navigator::new(Route::Home);
        let first = navigator.page();
        let second = navigator.navigate(Route::Login);
        assert!(second > first);
        assert_eq!(navigator.current(), &Route::Login);

        let third = navigator.navigate(Route::Login);
        assert!(third > second);
    }

    #[test]
    fn unknown_initial_route_is_kept_as_not_found() {
        let navigator = Navigator::new(Route::parse("/missing"));
        assert!(navigator.current().is_not_found());
        assert!(navigator.is_active(&Route::NotFound("/missing".into())));
        assert!(!navigator.is_active(&Route::Home));
    }

    #[test]
    fn navbar_turns_solid_past_the_scroll_threshold() {
        let mut navbar = NavbarState::default();
        navbar.on_scroll(10.0);
        assert!(!navbar.is_scrolled());
        navbar.on_scroll(10.5);
        assert!(navbar.is_scrolled());
        navbar.on_scroll(0.0);
        assert!(!navbar.is_scrolled());
    }

    #[test]
    fn menu_closes_on_route_change() {
        let mut navbar = NavbarState::default();
        navbar.toggle_menu();
        assert!(navbar.is_menu_open());
        navbar.on_route_change();
        assert!(!navbar.is_menu_open());
        navbar.toggle_menu();
        navbar.toggle_menu();
        assert!(!navbar.is_menu_open());
    }
}
