use crate::routes::{self, route_path};
use crate::state::{AppState, NavTab, Screen};

#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct MobileRouteState {
    pub root_screen: Screen,
    pub stack: Vec<Screen>,
    pub active_screen: Screen,
    pub active_path: String,
    pub selected_tab: NavTab,
    pub can_pop: bool,
}

/// Maps core router semantics to the navigation model shared by iOS and
/// Android. The host renders `active_screen` and requests stack changes back
/// through actions; it never derives navigation state on its own.
pub fn project_mobile(state: &AppState) -> MobileRouteState {
    let stack = state.router.screen_stack.clone();
    let active_screen = stack
        .last()
        .cloned()
        .unwrap_or_else(|| state.router.default_screen.clone());
    let active_path = route_path(&active_screen);
    MobileRouteState {
        root_screen: state.router.default_screen.clone(),
        can_pop: !stack.is_empty(),
        selected_tab: selected_tab(&active_path),
        stack,
        active_screen,
        active_path,
    }
}

#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub tab: NavTab,
    pub label: String,
    pub route: String,
}

/// The bottom navigation bar's fixed item set, in display order.
#[uniffi::export]
pub fn bottom_nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            tab: NavTab::Home,
            label: "Home".to_string(),
            route: routes::ROUTE_HOME.to_string(),
        },
        NavItem {
            tab: NavTab::Profile,
            label: "Profile".to_string(),
            route: routes::ROUTE_PROFILE_FORM.to_string(),
        },
        NavItem {
            tab: NavTab::Display,
            label: "Display".to_string(),
            route: routes::ROUTE_PROFILE_DISPLAY.to_string(),
        },
    ]
}

/// Bottom bar highlight rule: a tab is selected when the active path starts
/// with the tab's route name.
fn selected_tab(active_path: &str) -> NavTab {
    if active_path.starts_with(routes::ROUTE_PROFILE_DISPLAY) {
        NavTab::Display
    } else if active_path.starts_with(routes::ROUTE_PROFILE_FORM) {
        NavTab::Profile
    } else {
        NavTab::Home
    }
}
