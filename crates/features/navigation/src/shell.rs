use crate::route::Route;
use edupath_domain::config::ContactConfig;
use edupath_kernel::haptics::PulsePattern;
use tracing::debug;

/// Mobile menu overlay state. Closed on start and after every navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// User intents and router notifications handled by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    ToggleMenu,
    CloseMenu,
    Navigate(Route),
    /// Call to action leading to the course matcher.
    GetStarted,
    GoBack,
    /// The router reports the active route (link click, initial load, host back button).
    RouteObserved(Route),
    /// Open the external messaging channel.
    OpenSupport,
}

/// Side effects the host must perform after a dispatch, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    Haptic(PulsePattern),
    Push(Route),
    Replace(Route),
    Back,
    ScrollToTop,
    LockBodyScroll,
    UnlockBodyScroll,
    OpenExternal(String),
}

/// Immutable view of the shell handed to rendering code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSnapshot {
    pub route: Route,
    pub menu: MenuState,
    pub can_go_back: bool,
    pub contact_phone: String,
}

/// Sole owner of the shell's transient UI state.
#[derive(Debug, Clone)]
pub struct ShellController {
    route: Route,
    menu: MenuState,
    history: Vec<Route>,
    body_locked: bool,
    contact_phone: String,
    support_link: String,
}

impl ShellController {
    #[must_use]
    pub fn new(initial: Route, contact: &ContactConfig) -> Self {
        Self {
            route: initial,
            menu: MenuState::Closed,
            history: Vec::new(),
            body_locked: false,
            contact_phone: contact.phone.clone(),
            support_link: contact.support_link(),
        }
    }

    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub const fn menu(&self) -> MenuState {
        self.menu
    }

    #[must_use]
    pub const fn is_body_locked(&self) -> bool {
        self.body_locked
    }

    /// The back control is offered everywhere except on the home route.
    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        !self.route.is_home()
    }

    #[must_use]
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            route: self.route,
            menu: self.menu,
            can_go_back: self.can_go_back(),
            contact_phone: self.contact_phone.clone(),
        }
    }

    /// Applies one action and returns the effects the host must run.
    pub fn dispatch(&mut self, action: ShellAction) -> Vec<ShellEffect> {
        let mut effects = Vec::new();

        match action {
            ShellAction::ToggleMenu => {
                effects.push(ShellEffect::Haptic(PulsePattern::TAP));
                self.set_menu(self.menu.toggled(), &mut effects);
            },
            ShellAction::CloseMenu => self.set_menu(MenuState::Closed, &mut effects),
            ShellAction::Navigate(target) => self.navigate(target, &mut effects),
            ShellAction::GetStarted => self.navigate(Route::GradeInput, &mut effects),
            ShellAction::GoBack => self.go_back(&mut effects),
            ShellAction::RouteObserved(observed) => self.observe(observed, &mut effects),
            ShellAction::OpenSupport => {
                effects.push(ShellEffect::OpenExternal(self.support_link.clone()));
            },
        }

        debug!(?action, route = %self.route, menu = ?self.menu, effects = effects.len(), "Shell dispatch");
        effects
    }

    fn navigate(&mut self, target: Route, effects: &mut Vec<ShellEffect>) {
        effects.push(ShellEffect::Haptic(PulsePattern::TAP));
        self.set_menu(MenuState::Closed, effects);

        if target != self.route {
            self.history.push(self.route);
            self.route = target;
            effects.push(ShellEffect::Push(target));
            effects.push(ShellEffect::ScrollToTop);
        }
    }

    fn go_back(&mut self, effects: &mut Vec<ShellEffect>) {
        if self.route.is_home() {
            return;
        }

        effects.push(ShellEffect::Haptic(PulsePattern::TAP));
        self.set_menu(MenuState::Closed, effects);

        // Entries never equal the route that followed them, so popping always moves.
        if let Some(previous) = self.history.pop() {
            self.route = previous;
            effects.push(ShellEffect::Back);
        } else {
            self.route = Route::Home;
            effects.push(ShellEffect::Replace(Route::Home));
        }
        effects.push(ShellEffect::ScrollToTop);
    }

    fn observe(&mut self, observed: Route, effects: &mut Vec<ShellEffect>) {
        if observed == self.route {
            return;
        }

        self.set_menu(MenuState::Closed, effects);
        if self.history.last() == Some(&observed) {
            self.history.pop();
        } else {
            self.history.push(self.route);
        }
        self.route = observed;
        effects.push(ShellEffect::ScrollToTop);
    }

    fn set_menu(&mut self, next: MenuState, effects: &mut Vec<ShellEffect>) {
        self.menu = next;
        match (next.is_open(), self.body_locked) {
            (true, false) => {
                self.body_locked = true;
                effects.push(ShellEffect::LockBodyScroll);
            },
            (false, true) => {
                self.body_locked = false;
                effects.push(ShellEffect::UnlockBodyScroll);
            },
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ShellController {
        ShellController::new(Route::Home, &ContactConfig::default())
    }

    #[test]
    fn menu_toggle_locks_and_unlocks_scrolling() {
        let mut shell = controller();

        let opened = shell.dispatch(ShellAction::ToggleMenu);
        assert_eq!(
            opened,
            vec![ShellEffect::Haptic(PulsePattern::TAP), ShellEffect::LockBodyScroll]
        );
        assert!(shell.menu().is_open());

        let closed = shell.dispatch(ShellAction::ToggleMenu);
        assert_eq!(
            closed,
            vec![ShellEffect::Haptic(PulsePattern::TAP), ShellEffect::UnlockBodyScroll]
        );
        assert!(!shell.is_body_locked());
    }

    #[test]
    fn navigation_effects_are_ordered() {
        let mut shell = controller();
        shell.dispatch(ShellAction::ToggleMenu);

        let effects = shell.dispatch(ShellAction::Navigate(Route::Universities));
        assert_eq!(
            effects,
            vec![
                ShellEffect::Haptic(PulsePattern::TAP),
                ShellEffect::UnlockBodyScroll,
                ShellEffect::Push(Route::Universities),
                ShellEffect::ScrollToTop,
            ]
        );
    }

    #[test]
    fn back_without_history_replaces_with_home() {
        let mut shell = ShellController::new(Route::Results, &ContactConfig::default());

        let effects = shell.dispatch(ShellAction::GoBack);
        assert!(effects.contains(&ShellEffect::Replace(Route::Home)));
        assert_eq!(shell.route(), Route::Home);
    }
}
