mod chrome;
mod effects;

pub use chrome::{Footer, Header, StatusBar};
pub use effects::apply_effect;

use crate::shell::ShellAction;
use dioxus::prelude::*;
use std::fmt;

/// Context handle through which any component can talk to the shell controller.
#[derive(Clone, Copy, PartialEq)]
pub struct ShellDispatch(Callback<ShellAction>);

impl fmt::Debug for ShellDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellDispatch").finish_non_exhaustive()
    }
}

impl ShellDispatch {
    pub fn send(&self, action: ShellAction) {
        self.0.call(action);
    }
}

/// Installs `dispatch` as the shell context for the calling component's subtree.
pub fn provide_shell(dispatch: Callback<ShellAction>) -> ShellDispatch {
    use_context_provider(|| ShellDispatch(dispatch))
}

/// The shell context installed by the layout.
#[must_use]
pub fn use_shell() -> ShellDispatch {
    use_context::<ShellDispatch>()
}
