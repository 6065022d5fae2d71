use super::AppRoute;
use crate::Platform;
use dioxus::prelude::*;
use edupath_navigation::client::{Footer, Header, StatusBar, apply_effect, provide_shell};
use edupath_navigation::{Route, ShellAction, ShellController, ShellEffect};
use tracing::debug;

/// Chrome around every page. Owns the shell controller and runs its effects.
#[component]
pub(super) fn ShellLayout() -> Element {
    let platform = use_context::<Platform>();
    let navigator = use_navigator();
    let current = use_route::<AppRoute>();

    let contact = platform.config.contact.clone();
    let initial = Route::from(&current);
    let mut shell = use_signal(move || ShellController::new(initial, &contact));

    let haptics = platform.haptics.clone();
    let dispatch = use_callback(move |action: ShellAction| {
        let effects = shell.write().dispatch(action);
        debug!(?action, effects = effects.len(), "Shell action dispatched");

        for effect in &effects {
            match effect {
                ShellEffect::Push(route) => {
                    navigator.push(AppRoute::from(*route));
                },
                ShellEffect::Replace(route) => {
                    navigator.replace(AppRoute::from(*route));
                },
                ShellEffect::Back => navigator.go_back(),
                other => apply_effect(other, &haptics),
            }
        }
    });
    provide_shell(dispatch);

    // Browser history and links change the route without going through the shell.
    use_effect(use_reactive((&current,), move |(current,)| {
        dispatch.call(ShellAction::RouteObserved(Route::from(&current)));
    }));

    let snapshot = shell.read().snapshot();
    let contact_phone = snapshot.contact_phone.clone();

    rsx! {
        div { class: "min-h-screen flex flex-col bg-black text-white selection:bg-red-600",
            StatusBar { contact_phone, on_action: move |action| dispatch.call(action) }
            Header { snapshot, on_action: move |action| dispatch.call(action) }
            main { class: "flex-grow", Outlet::<AppRoute> {} }
            Footer { on_action: move |action| dispatch.call(action) }
        }
    }
}
