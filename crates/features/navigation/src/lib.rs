//! Navigation shell: the route model, the mobile menu and the controller that owns them.
//!
//! [`ShellController`] is a plain state machine. Every interaction goes through
//! [`ShellController::dispatch`], which returns the [`ShellEffect`]s the host has to run
//! (router moves, scroll reset, body scroll lock, haptics). Rendering only ever reads a
//! [`ShellSnapshot`].
//!
//! The Dioxus chrome (status bar, header, mobile menu, footer) lives behind the `client`
//! feature.

mod route;
mod shell;

#[cfg(feature = "client")]
pub mod client;

pub use crate::route::Route;
pub use crate::shell::{MenuState, ShellAction, ShellController, ShellEffect, ShellSnapshot};
